use super::*;

/// Tests creating a post.
///
/// Expected: Ok with the post visible and carrying the given status
#[tokio::test]
async fn creates_visible_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let post = PostRepository::new(db)
        .create(InsertPostParam {
            author_id: author.id,
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            content: "<p>Body</p>".to_string(),
            status: PostStatus::Draft,
        })
        .await?;

    assert_eq!(post.slug, "hello");
    assert_eq!(post.status, PostStatus::Draft);
    assert!(post.visible);
    assert_eq!(post.author_id, author.id);
    assert!(!post.is_public());

    Ok(())
}

/// Tests the unique slug constraint.
///
/// Expected: Err when inserting a second post with the same slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    factory::post::PostFactory::new(db, author.id)
        .slug("taken")
        .build()
        .await?;

    let result = PostRepository::new(db)
        .create(InsertPostParam {
            author_id: author.id,
            title: "Taken".to_string(),
            slug: "taken".to_string(),
            content: "x".to_string(),
            status: PostStatus::Published,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
