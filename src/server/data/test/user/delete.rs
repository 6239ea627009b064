use super::*;

/// Tests deleting a user and cascading to their posts.
///
/// Expected: Ok(true) and the user's posts are gone
#[tokio::test]
async fn deletes_user_and_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, post) = factory::helpers::create_post_with_author(db).await?;

    let deleted = UserRepository::new(db).delete(user.id).await?;

    assert!(deleted);
    let remaining = crate::server::data::post::PostRepository::new(db)
        .find_by_id(post.id)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Expected: Ok(false) when the user does not exist
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete(404).await?;

    assert!(!deleted);

    Ok(())
}
