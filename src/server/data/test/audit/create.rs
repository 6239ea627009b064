use super::*;

/// Expected: Ok with the entry stored as given
#[tokio::test]
async fn appends_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = factory::create_admin(db).await?;

    let entry = AuditRepository::new(db)
        .create(actor.id, "delete", "post", 42)
        .await?;

    assert_eq!(entry.actor_id, Some(actor.id));
    assert_eq!(entry.action, "delete");
    assert_eq!(entry.entity, "post");
    assert_eq!(entry.entity_id, 42);

    Ok(())
}

/// Tests that entries outlive their actor.
///
/// Expected: Ok with the entry kept and `actor_id` cleared after the user is deleted
#[tokio::test]
async fn keeps_entry_when_actor_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = factory::create_admin(db).await?;
    let repo = AuditRepository::new(db);
    repo.create(actor.id, "create", "user", 7).await?;

    crate::server::data::user::UserRepository::new(db)
        .delete(actor.id)
        .await?;

    let (entries, total) = repo
        .get_paginated(
            &GetAuditParam {
                page: 1,
                per_page: 10,
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(entries[0].actor_id, None);

    Ok(())
}
