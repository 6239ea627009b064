use super::*;

/// Expected: Ok with the like removed and the count back to zero
#[tokio::test]
async fn removes_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let repo = LikeRepository::new(db);

    repo.create(author.id, post.id).await?;
    let like_id = repo.find(author.id, post.id).await?.unwrap();

    repo.delete(like_id).await?;

    assert!(repo.find(author.id, post.id).await?.is_none());
    assert_eq!(repo.count_for_post(post.id).await?, 0);

    Ok(())
}
