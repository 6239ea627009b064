use super::*;

/// Tests assigning tags to a post.
///
/// Expected: Ok with names returned alphabetically
#[tokio::test]
async fn assigns_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let repo = TagRepository::new(db);

    repo.set_post_tags(post.id, &["web".to_string(), "rust".to_string()])
        .await?;

    assert_eq!(repo.names_for_post(post.id).await?, vec!["rust", "web"]);

    Ok(())
}

/// Tests that setting tags replaces the previous set entirely.
///
/// Expected: Ok with only the new tags linked; old tag rows are kept
#[tokio::test]
async fn replaces_previous_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let old = factory::create_tag(db, "old").await?;
    factory::attach_tag(db, post.id, old.id).await?;

    let repo = TagRepository::new(db);
    repo.set_post_tags(post.id, &["new".to_string()]).await?;

    assert_eq!(repo.names_for_post(post.id).await?, vec!["new"]);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 2);

    repo.set_post_tags(post.id, &[]).await?;
    assert!(repo.names_for_post(post.id).await?.is_empty());

    Ok(())
}
