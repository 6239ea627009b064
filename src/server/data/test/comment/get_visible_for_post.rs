use super::*;

/// Tests that hidden comments and other posts' comments are excluded.
///
/// Expected: Ok with only the visible comments of the post, newest first
#[tokio::test]
async fn returns_visible_comments_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let other_post = factory::create_post(db, author.id).await?;

    let first = factory::create_comment(db, author.id, post.id).await?;
    let second = factory::create_comment(db, author.id, post.id).await?;
    factory::comment::CommentFactory::new(db, author.id, post.id)
        .visible(false)
        .build()
        .await?;
    factory::create_comment(db, author.id, other_post.id).await?;

    let comments = CommentRepository::new(db)
        .get_visible_for_post(post.id)
        .await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, second.id);
    assert_eq!(comments[1].id, first.id);

    Ok(())
}
