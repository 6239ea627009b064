use super::*;

fn page() -> GetAuditParam {
    GetAuditParam {
        page: 1,
        per_page: 10,
        ..Default::default()
    }
}

/// Tests filtering by action and entity.
///
/// Expected: Ok with only entries matching both filters
#[tokio::test]
async fn filters_by_action_and_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = factory::create_admin(db).await?;
    let repo = AuditRepository::new(db);
    repo.create(actor.id, "create", "post", 1).await?;
    repo.create(actor.id, "delete", "post", 1).await?;
    repo.create(actor.id, "delete", "comment", 2).await?;

    let (entries, total) = repo
        .get_paginated(
            &GetAuditParam {
                action: Some("delete".to_string()),
                entity: Some("post".to_string()),
                ..page()
            },
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(entries[0].action, "delete");
    assert_eq!(entries[0].entity, "post");

    Ok(())
}

fn search(text: &str) -> GetAuditParam {
    GetAuditParam {
        search: Some(text.to_string()),
        ..page()
    }
}

/// Tests searching by actor name, actor email or entity id.
///
/// Expected: Ok with entries of the matching actor plus the matching entity id
#[tokio::test]
async fn searches_actor_or_entity_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::UserFactory::new(db)
        .name("Íñigo Admin")
        .email("inigo@example.com")
        .admin(true)
        .build()
        .await?;
    let second = factory::user::UserFactory::new(db)
        .name("Other")
        .email("other@example.com")
        .admin(true)
        .build()
        .await?;
    let repo = AuditRepository::new(db);
    repo.create(first.id, "create", "post", 10).await?;
    repo.create(second.id, "create", "post", 20).await?;
    repo.create(second.id, "create", "post", 30).await?;

    let (entries, by_name) = repo.get_paginated(&search("ÍÑIGO")).await?;
    let (_, by_email) = repo.get_paginated(&search("inigo@")).await?;
    let (_, by_entity_id) = repo.get_paginated(&search("30")).await?;
    let (_, nothing) = repo.get_paginated(&search("nobody")).await?;
    let (_, blank) = repo.get_paginated(&search("   ")).await?;

    assert_eq!(by_name, 1);
    assert_eq!(entries[0].actor_id, Some(first.id));
    assert_eq!(by_email, 1);
    assert_eq!(by_entity_id, 1);
    assert_eq!(nothing, 0);
    assert_eq!(blank, 3);

    Ok(())
}

/// Expected: Ok with the latest entry first
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = factory::create_admin(db).await?;
    let repo = AuditRepository::new(db);
    repo.create(actor.id, "create", "post", 1).await?;
    let latest = repo.create(actor.id, "update", "post", 1).await?;

    let (entries, _) = repo.get_paginated(&page()).await?;

    assert_eq!(entries[0].id, latest.id);

    Ok(())
}
