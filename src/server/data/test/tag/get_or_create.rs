use super::*;

/// Tests that an existing tag is reused instead of duplicated.
///
/// Expected: Ok with the same id on both calls and a single tag row
#[tokio::test]
async fn reuses_existing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let first = repo.get_or_create("rust").await?;
    let second = repo.get_or_create("rust").await?;

    assert_eq!(first, second);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 1);

    Ok(())
}
