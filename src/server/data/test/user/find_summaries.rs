use super::*;

/// Tests loading author summaries by id.
///
/// Verifies that every existing id is returned and unknown ids are skipped.
///
/// Expected: Ok with a map containing only existing users
#[tokio::test]
async fn maps_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let summaries = UserRepository::new(db)
        .find_summaries(&[first.id, second.id, 9999])
        .await?;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[&first.id].email, first.email);
    assert_eq!(summaries[&second.id].name, second.name);

    Ok(())
}

/// Expected: Ok with an empty map and no query for an empty id list
#[tokio::test]
async fn handles_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let summaries = UserRepository::new(db).find_summaries(&[]).await?;

    assert!(summaries.is_empty());

    Ok(())
}
