use super::*;

/// Expected: Ok with hidden comments left out of the count
#[tokio::test]
async fn ignores_hidden_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    factory::create_comment(db, author.id, post.id).await?;
    factory::comment::CommentFactory::new(db, author.id, post.id)
        .visible(false)
        .build()
        .await?;

    let repo = CommentRepository::new(db);

    assert_eq!(repo.count_visible_for_post(post.id).await?, 1);
    assert_eq!(repo.count_by_author(author.id).await?, 2);
    assert_eq!(repo.count().await?, 2);

    Ok(())
}
