use super::*;

/// Expected: Ok(None) when nobody is logged in
#[tokio::test]
async fn none_for_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).current_user().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that deactivated accounts are treated as anonymous.
///
/// Expected: Some for an active user, None once deactivated
#[tokio::test]
async fn ignores_inactive_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let active = factory::create_user(db).await?;
    let inactive = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(active.id).await?;
    assert_eq!(guard.current_user().await?.map(|u| u.id), Some(active.id));

    auth_session.set_user_id(inactive.id).await?;
    assert!(guard.current_user().await?.is_none());

    Ok(())
}

/// Expected: Ok(None) after the session is cleared
#[tokio::test]
async fn none_after_clear() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    auth_session.clear().await;

    assert!(AuthGuard::new(db, session).current_user().await?.is_none());

    Ok(())
}
