use super::*;

/// Tests paginating users newest first.
///
/// Expected: Ok with page sizes respected and total counting every user
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for _ in 0..5 {
        created.push(factory::create_user(db).await?);
    }

    let repo = UserRepository::new(db);
    let (first_page, total) = repo.get_all_paginated(1, 2, None).await?;
    let (last_page, _) = repo.get_all_paginated(3, 2, None).await?;

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].id, created[4].id);
    assert_eq!(last_page.len(), 1);
    assert_eq!(last_page[0].id, created[0].id);

    Ok(())
}

/// Tests searching users by name or email regardless of case.
///
/// Expected: Ok with only the matching users
#[tokio::test]
async fn searches_name_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Maria Lopez")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .without_name()
        .email("maria.g@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Pedro")
        .build()
        .await?;

    let (users, total) = UserRepository::new(db)
        .get_all_paginated(1, 10, Some("MARIA"))
        .await?;

    assert_eq!(total, 2);
    assert_eq!(users.len(), 2);

    Ok(())
}

/// Tests case-insensitive search on accented names and literal wildcards.
///
/// Expected: Ok with the accented name found in any case and `_` matching literally
#[tokio::test]
async fn searches_non_ascii_names_and_wildcards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let accented = factory::user::UserFactory::new(db)
        .name("Ángela Muñoz")
        .email("angela@example.com")
        .build()
        .await?;
    let underscored = factory::user::UserFactory::new(db)
        .name("Plain")
        .email("first_last@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (by_name, name_total) = repo.get_all_paginated(1, 10, Some("ÁNGELA MUÑOZ")).await?;
    let (by_underscore, underscore_total) = repo.get_all_paginated(1, 10, Some("_")).await?;

    assert_eq!(name_total, 1);
    assert_eq!(by_name[0].id, accented.id);
    assert_eq!(underscore_total, 1);
    assert_eq!(by_underscore[0].id, underscored.id);

    Ok(())
}
