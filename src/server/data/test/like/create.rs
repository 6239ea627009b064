use sea_orm::SqlErr;

use super::*;

/// Tests recording a like and counting it.
///
/// Expected: Ok with the like found and counted once
#[tokio::test]
async fn records_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let repo = LikeRepository::new(db);

    repo.create(author.id, post.id).await?;

    assert!(repo.find(author.id, post.id).await?.is_some());
    assert_eq!(repo.count_for_post(post.id).await?, 1);

    Ok(())
}

/// Tests the unique (user, post) constraint.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn rejects_second_like_from_same_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let repo = LikeRepository::new(db);

    repo.create(author.id, post.id).await?;
    let err = repo.create(author.id, post.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.count_for_post(post.id).await?, 1);

    Ok(())
}
