//! Tag data repository.
//!
//! Tag names are stored normalized (sanitized, lowercase) by `PostService`, so
//! lookups here compare names exactly.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr,
};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    /// Creates a new TagRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TagRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the id of the tag with this name, creating it when missing.
    ///
    /// A concurrent insert of the same name is resolved by reading the winner's row.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the existing or newly created tag
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn get_or_create(&self, name: &str) -> Result<i32, DbErr> {
        if let Some(tag) = self.find_by_name(name).await? {
            return Ok(tag.id);
        }

        let inserted = entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(tag) => Ok(tag.id),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                self.find_by_name(name)
                    .await?
                    .map(|tag| tag.id)
                    .ok_or(err)
            }
            Err(err) => Err(err),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Replaces the full tag set of a post.
    ///
    /// # Arguments
    /// - `post_id` - Post to retag
    /// - `names` - Normalized, deduplicated tag names; an empty slice removes all tags
    pub async fn set_post_tags(&self, post_id: i32, names: &[String]) -> Result<(), DbErr> {
        entity::prelude::PostTag::delete_many()
            .filter(entity::post_tag::Column::PostId.eq(post_id))
            .exec(self.db)
            .await?;

        for name in names {
            let tag_id = self.get_or_create(name).await?;

            entity::prelude::PostTag::insert(entity::post_tag::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                tag_id: ActiveValue::Set(tag_id),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    /// Tag names of a post in alphabetical order.
    pub async fn names_for_post(&self, post_id: i32) -> Result<Vec<String>, DbErr> {
        let tag_ids: Vec<i32> = entity::prelude::PostTag::find()
            .filter(entity::post_tag::Column::PostId.eq(post_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.tag_id)
            .collect();

        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        let tags = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(tag_ids))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(|tag| tag.name).collect())
    }
}
