use super::*;

/// Tests deleting a post cascades to its comments.
///
/// Expected: Ok(true) and the comment count drops to zero
#[tokio::test]
async fn deletes_post_and_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    factory::create_comment(db, author.id, post.id).await?;

    let deleted = PostRepository::new(db).delete(post.id).await?;

    assert!(deleted);
    let comments = crate::server::data::comment::CommentRepository::new(db)
        .count()
        .await?;
    assert_eq!(comments, 0);

    Ok(())
}

/// Expected: Ok(false) for a missing post
#[tokio::test]
async fn returns_false_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PostRepository::new(db).delete(404).await?);

    Ok(())
}
