use super::*;

/// Expected: Ok(Some) for an existing slug regardless of status
#[tokio::test]
async fn finds_draft_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let draft = factory::post::PostFactory::new(db, author.id)
        .slug("my-draft")
        .draft()
        .build()
        .await?;

    let post = PostRepository::new(db).find_by_slug("my-draft").await?.unwrap();

    assert_eq!(post.id, draft.id);
    assert_eq!(post.status, PostStatus::Draft);

    Ok(())
}

/// Expected: Ok(None) for an unknown slug
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let post = PostRepository::new(db).find_by_slug("missing").await?;

    assert!(post.is_none());

    Ok(())
}
