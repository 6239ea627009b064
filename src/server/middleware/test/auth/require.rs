use super::*;

/// Tests an anonymous session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Expected: Err(AuthError::UserInactive) for a deactivated account
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserInactive(_)))
    ));

    Ok(())
}

/// Tests the admin permission.
///
/// Expected: AccessDenied for a regular user, Ok for an admin
#[tokio::test]
async fn admin_permission_requires_admin_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(user.id).await?;
    let result = guard.require(&[Permission::Admin]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    auth_session.set_user_id(admin.id).await?;
    let authorized = guard.require(&[Permission::Admin]).await?;
    assert_eq!(authorized.id, admin.id);

    Ok(())
}

/// Tests ownership checks for owners, strangers and admins.
///
/// Expected: Ok for the owner and an admin, AccessDenied for another user
#[tokio::test]
async fn owner_or_admin_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;
    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(owner.id).await?;
    assert!(guard
        .require(&[Permission::OwnerOrAdmin(owner.id)])
        .await
        .is_ok());

    auth_session.set_user_id(stranger.id).await?;
    assert!(matches!(
        guard.require(&[Permission::OwnerOrAdmin(owner.id)]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    auth_session.set_user_id(admin.id).await?;
    assert!(guard
        .require(&[Permission::OwnerOrAdmin(owner.id)])
        .await
        .is_ok());

    Ok(())
}
