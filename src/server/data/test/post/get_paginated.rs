use chrono::{Duration, Utc};

use super::*;

/// Tests that the public scope hides drafts and hidden posts.
///
/// Expected: Ok with only the published, visible post
#[tokio::test]
async fn public_scope_excludes_drafts_and_hidden() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let public = factory::create_post(db, author.id).await?;
    factory::post::PostFactory::new(db, author.id)
        .draft()
        .build()
        .await?;
    factory::post::PostFactory::new(db, author.id)
        .visible(false)
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let (posts, total) = repo
        .get_paginated(PostScope::Public, 1, 10, None, None)
        .await?;
    let (all, all_total) = repo.get_paginated(PostScope::All, 1, 10, None, None).await?;

    assert_eq!(total, 1);
    assert_eq!(posts[0].id, public.id);
    assert_eq!(all_total, 3);
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests ordering by creation time, newest first.
///
/// Expected: Ok with the most recent post first
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let older = factory::post::PostFactory::new(db, author.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = factory::post::PostFactory::new(db, author.id)
        .created_at(Utc::now())
        .build()
        .await?;

    let (posts, _) = PostRepository::new(db)
        .get_paginated(PostScope::Public, 1, 10, None, None)
        .await?;

    assert_eq!(posts[0].id, newer.id);
    assert_eq!(posts[1].id, older.id);

    Ok(())
}

/// Tests searching title and content combined with the tag filter.
///
/// Expected: Ok with search and tag filters combined
#[tokio::test]
async fn filters_by_search_and_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let by_title = factory::post::PostFactory::new(db, author.id)
        .title("Learning Rust")
        .build()
        .await?;
    let by_content = factory::post::PostFactory::new(db, author.id)
        .content("<p>rust ownership</p>")
        .build()
        .await?;
    factory::post::PostFactory::new(db, author.id)
        .title("Gardening")
        .build()
        .await?;
    let tag = factory::create_tag(db, "ownership").await?;
    factory::attach_tag(db, by_content.id, tag.id).await?;

    let repo = PostRepository::new(db);
    let (found, total) = repo
        .get_paginated(PostScope::Public, 1, 10, Some("RUST"), None)
        .await?;
    let (tagged, tagged_total) = repo
        .get_paginated(PostScope::Public, 1, 10, Some("rust"), Some("ownership"))
        .await?;
    let (_, missing_tag) = repo
        .get_paginated(PostScope::Public, 1, 10, None, Some("missing"))
        .await?;

    assert_eq!(total, 2);
    assert!(found.iter().any(|p| p.id == by_title.id));
    assert_eq!(tagged_total, 1);
    assert_eq!(tagged[0].id, by_content.id);
    assert_eq!(missing_tag, 0);

    Ok(())
}

/// Tests that search ignores case for non-ASCII letters too.
///
/// Expected: Ok with the post found by lowercase and uppercase accented terms
#[tokio::test]
async fn search_folds_non_ascii_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::post::PostFactory::new(db, author.id)
        .title("Señor Ñandú")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    for term in ["ñandú", "ÑANDÚ", "SEÑOR"] {
        let (posts, total) = repo
            .get_paginated(PostScope::Public, 1, 10, Some(term), None)
            .await?;
        assert_eq!(total, 1, "{}", term);
        assert_eq!(posts[0].id, post.id);
    }

    Ok(())
}

/// Tests that `%` and `_` in a search term match literally.
///
/// Expected: Ok with only the post containing the literal characters
#[tokio::test]
async fn search_escapes_wildcards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let literal = factory::post::PostFactory::new(db, author.id)
        .title("snake_case and 100% sure")
        .build()
        .await?;
    factory::post::PostFactory::new(db, author.id)
        .title("Plain title")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let (underscore, underscore_total) = repo
        .get_paginated(PostScope::Public, 1, 10, Some("_"), None)
        .await?;
    let (_, percent_total) = repo
        .get_paginated(PostScope::Public, 1, 10, Some("%"), None)
        .await?;

    assert_eq!(underscore_total, 1);
    assert_eq!(underscore[0].id, literal.id);
    assert_eq!(percent_total, 1);

    Ok(())
}

/// Tests that an updated title is searchable under its new text only.
///
/// Expected: Ok with the post matched by the new title
#[tokio::test]
async fn search_follows_updated_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::post::PostFactory::new(db, author.id)
        .title("Old name")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    repo.update(
        post.id,
        &UpdatePostParam {
            title: Some("Árbol Nuevo".to_string()),
            ..Default::default()
        },
    )
    .await?;

    let (_, old) = repo
        .get_paginated(PostScope::Public, 1, 10, Some("old name"), None)
        .await?;
    let (_, new) = repo
        .get_paginated(PostScope::Public, 1, 10, Some("árbol"), None)
        .await?;

    assert_eq!(old, 0);
    assert_eq!(new, 1);

    Ok(())
}

/// Tests the author scope including drafts of that author only.
///
/// Expected: Ok with both of the author's posts and none of the other author's
#[tokio::test]
async fn author_scope_includes_drafts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_post(db, author.id).await?;
    factory::post::PostFactory::new(db, author.id)
        .draft()
        .build()
        .await?;
    factory::create_post(db, other.id).await?;

    let (posts, total) = PostRepository::new(db)
        .get_paginated(PostScope::Author(author.id), 1, 10, None, None)
        .await?;

    assert_eq!(total, 2);
    assert!(posts.iter().all(|p| p.author_id == author.id));

    Ok(())
}
