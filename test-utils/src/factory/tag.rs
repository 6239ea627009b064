//! Tag factory for creating tags and post-tag links.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Creates a tag with the given name.
pub async fn create_tag(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links an existing tag to an existing post.
pub async fn attach_tag(
    db: &DatabaseConnection,
    post_id: i32,
    tag_id: i32,
) -> Result<entity::post_tag::Model, DbErr> {
    entity::prelude::PostTag::insert(entity::post_tag::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        tag_id: ActiveValue::Set(tag_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(entity::post_tag::Model { post_id, tag_id })
}
