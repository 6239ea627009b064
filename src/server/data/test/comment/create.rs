use super::*;

/// Expected: Ok with a visible comment linked to author and post
#[tokio::test]
async fn creates_visible_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;

    let comment = CommentRepository::new(db)
        .create(CreateCommentParam {
            author_id: author.id,
            post_id: post.id,
            content: "Nice post".to_string(),
        })
        .await?;

    assert_eq!(comment.content, "Nice post");
    assert!(comment.visible);
    assert_eq!(comment.author_id, author.id);
    assert_eq!(comment.post_id, post.id);

    Ok(())
}

/// Tests the post foreign key.
///
/// Expected: Err when the post does not exist
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let result = CommentRepository::new(db)
        .create(CreateCommentParam {
            author_id: author.id,
            post_id: 404,
            content: "Orphan".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
