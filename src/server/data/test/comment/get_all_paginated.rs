use super::*;

/// Tests the moderation listing includes hidden comments.
///
/// Expected: Ok with every comment counted and the page size respected
#[tokio::test]
async fn includes_hidden_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    factory::create_comment(db, author.id, post.id).await?;
    factory::create_comment(db, author.id, post.id).await?;
    let hidden = factory::comment::CommentFactory::new(db, author.id, post.id)
        .visible(false)
        .build()
        .await?;

    let (comments, total) = CommentRepository::new(db)
        .get_all_paginated(1, 2)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, hidden.id);

    Ok(())
}
