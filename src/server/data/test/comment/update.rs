use super::*;

/// Expected: Ok(Some) with visibility changed and content untouched
#[tokio::test]
async fn hides_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let comment = factory::create_comment(db, author.id, post.id).await?;

    let updated = CommentRepository::new(db)
        .update(
            comment.id,
            UpdateCommentParam {
                visible: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(!updated.visible);
    assert_eq!(updated.content, comment.content);

    Ok(())
}

/// Expected: Ok(None) for a missing comment, and delete reports false
#[tokio::test]
async fn missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    assert!(repo
        .update(404, UpdateCommentParam::default())
        .await?
        .is_none());
    assert!(!repo.delete(404).await?);

    Ok(())
}
