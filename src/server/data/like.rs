//! Like data repository.
//!
//! The `(user_id, post_id)` pair is backed by a unique index, so a concurrent
//! double insert surfaces as a unique constraint violation from `create`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct LikeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LikeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the id of the user's like on a post, if any.
    pub async fn find(&self, user_id: i32, post_id: i32) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::PostLike::find()
            .filter(entity::post_like::Column::UserId.eq(user_id))
            .filter(entity::post_like::Column::PostId.eq(post_id))
            .one(self.db)
            .await?;

        Ok(entity.map(|like| like.id))
    }

    pub async fn create(&self, user_id: i32, post_id: i32) -> Result<(), DbErr> {
        entity::post_like::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            post_id: ActiveValue::Set(post_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, like_id: i32) -> Result<(), DbErr> {
        entity::prelude::PostLike::delete_by_id(like_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn count_for_post(&self, post_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PostLike::find()
            .filter(entity::post_like::Column::PostId.eq(post_id))
            .count(self.db)
            .await
    }
}
