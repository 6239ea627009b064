use super::*;

/// Tests that only the provided fields change.
///
/// Expected: Ok(Some) with name and role updated, email and active untouched
#[tokio::test]
async fn applies_partial_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UserChanges {
                name: Some("Renamed".to_string()),
                role: Some(Role::Admin),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name.as_deref(), Some("Renamed"));
    assert_eq!(updated.role, Role::Admin);
    assert_eq!(updated.email, user.email);
    assert!(updated.active);
    assert!(updated.updated_at >= user.updated_at);

    Ok(())
}

/// Tests replacing the password hash.
///
/// Expected: Ok with the new hash visible through credential lookup
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.update(
        user.id,
        UserChanges {
            password_hash: Some("new-hash".to_string()),
            ..Default::default()
        },
    )
    .await?;

    let credentials = repo
        .find_credentials_by_email(&user.email)
        .await?
        .unwrap();
    assert_eq!(credentials.password_hash, "new-hash");

    Ok(())
}

/// Expected: Ok(None) for a missing user
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(404, UserChanges::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
