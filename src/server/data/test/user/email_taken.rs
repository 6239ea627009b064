use super::*;

/// Tests detecting an email that is already registered.
///
/// Expected: Ok(true) for a registered email, Ok(false) for a new one
#[tokio::test]
async fn detects_registered_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("taken@example.com", None).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}

/// Tests that a user's own email does not count as taken for them.
///
/// Expected: Ok(false) when the owner is excluded, Ok(true) for anyone else
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .email("mine@example.com")
        .build()
        .await?;
    let other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.email_taken("mine@example.com", Some(owner.id)).await?);
    assert!(repo.email_taken("mine@example.com", Some(other.id)).await?);

    Ok(())
}
