use super::*;

/// Tests a partial update keeping the slug stable.
///
/// Expected: Ok(Some) with new title and status, unchanged slug and content
#[tokio::test]
async fn updates_fields_keeps_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::post::PostFactory::new(db, author.id)
        .draft()
        .build()
        .await?;

    let updated = PostRepository::new(db)
        .update(
            post.id,
            &UpdatePostParam {
                title: Some("Renamed".to_string()),
                status: Some(PostStatus::Published),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.status, PostStatus::Published);
    assert_eq!(updated.slug, post.slug);
    assert_eq!(updated.content, post.content);

    Ok(())
}

/// Expected: Ok(None) for a missing post
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PostRepository::new(db)
        .update(404, &UpdatePostParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
