use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the supplied fields and that new accounts
/// start active.
///
/// Expected: Ok with active user carrying the given role
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(InsertUserParam {
            name: Some("Ana".to_string()),
            email: "ana@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
        })
        .await?;

    assert_eq!(user.name.as_deref(), Some("Ana"));
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.role, Role::User);
    assert!(user.active);

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err on second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = InsertUserParam {
        name: None,
        email: "dup@example.com".to_string(),
        password_hash: "hash".to_string(),
        role: Role::User,
    };

    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(result.is_err());

    Ok(())
}
