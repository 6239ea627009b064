use super::*;

/// Expected: Ok(true) for a used slug, Ok(false) otherwise
#[tokio::test]
async fn detects_used_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    factory::post::PostFactory::new(db, author.id)
        .slug("hello-world")
        .build()
        .await?;

    let repo = PostRepository::new(db);

    assert!(repo.slug_exists("hello-world").await?);
    assert!(!repo.slug_exists("hello-world-1").await?);

    Ok(())
}
