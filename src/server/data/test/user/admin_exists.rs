use super::*;

/// Expected: Ok(false) when only regular users exist
#[tokio::test]
async fn returns_false_without_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let exists = UserRepository::new(db).admin_exists().await?;

    assert!(!exists);

    Ok(())
}

/// Expected: Ok(true) once an admin exists
#[tokio::test]
async fn returns_true_with_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;

    let exists = UserRepository::new(db).admin_exists().await?;

    assert!(exists);

    Ok(())
}
