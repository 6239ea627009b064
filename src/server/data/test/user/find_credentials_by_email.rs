use super::*;

/// Expected: Ok(Some) with the stored hash for a registered email
#[tokio::test]
async fn returns_user_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("login@example.com")
        .password_hash("$argon2id$stored")
        .build()
        .await?;

    let credentials = UserRepository::new(db)
        .find_credentials_by_email("login@example.com")
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "$argon2id$stored");

    Ok(())
}

/// Expected: Ok(None) for an unknown email
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let credentials = UserRepository::new(db)
        .find_credentials_by_email("nobody@example.com")
        .await?;

    assert!(credentials.is_none());

    Ok(())
}
