//! Post data repository.
//!
//! Listings are always ordered newest first. The tag filter is applied as a subquery
//! over `post_tag`, so it never expands into a list of ids.

use std::collections::HashMap;

use chrono::Utc;
use entity::post::PostStatus;
use sea_orm::{
    sea_query::SelectStatement, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait, Select,
};

use crate::server::{
    data::{contains_pattern, page_index, search_key},
    model::post::{InsertPostParam, Post, PostScope, UpdatePostParam},
};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    /// Creates a new PostRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PostRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new post, visible by default.
    ///
    /// # Arguments
    /// - `param` - Sanitized post fields and a slug that is not yet taken
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post
    /// - `Err(DbErr)` - Database error, including unique violations on `slug`
    pub async fn create(&self, param: InsertPostParam) -> Result<Post, DbErr> {
        let now = Utc::now();

        let entity = entity::post::ActiveModel {
            title_search: ActiveValue::Set(search_key(&param.title)),
            content_search: ActiveValue::Set(search_key(&param.content)),
            title: ActiveValue::Set(param.title),
            slug: ActiveValue::Set(param.slug),
            content: ActiveValue::Set(param.content),
            status: ActiveValue::Set(param.status),
            visible: ActiveValue::Set(true),
            author_id: ActiveValue::Set(param.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(entity))
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Post::find()
            .filter(entity::post::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Loads posts by id, keyed by id. Missing ids are absent from the map.
    pub async fn find_by_ids(&self, post_ids: &[i32]) -> Result<HashMap<i32, Post>, DbErr> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Post::find()
            .filter(entity::post::Column::Id.is_in(post_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|p| (p.id, Post::from_entity(p)))
            .collect())
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find()
            .filter(entity::post::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Gets posts with pagination, newest first.
    ///
    /// # Arguments
    /// - `scope` - Which posts may be returned
    /// - `page` - One-based page number
    /// - `per_page` - Number of posts per page
    /// - `search` - Optional case-insensitive match on title or content
    /// - `tag` - Optional normalized tag name the posts must carry
    ///
    /// # Returns
    /// - `Ok((posts, total))` - Posts for the requested page and total matching post count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        scope: PostScope,
        page: u64,
        per_page: u64,
        search: Option<&str>,
        tag: Option<&str>,
    ) -> Result<(Vec<Post>, u64), DbErr> {
        let mut query = scoped(scope)
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id);

        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::post::Column::TitleSearch.like(contains_pattern(search)))
                    .add(entity::post::Column::ContentSearch.like(contains_pattern(search))),
            );
        }

        if let Some(tag) = tag {
            query = query.filter(entity::post::Column::Id.in_subquery(ids_tagged(tag)));
        }

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page)).await?;
        let posts = entities.into_iter().map(Post::from_entity).collect();

        Ok((posts, total))
    }

    /// Applies a partial update to a post; tags are handled by `TagRepository`.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - The updated post
    /// - `Ok(None)` - No post with this id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        post_id: i32,
        changes: &UpdatePostParam,
    ) -> Result<Option<Post>, DbErr> {
        let Some(entity) = entity::prelude::Post::find_by_id(post_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();

        if let Some(title) = &changes.title {
            active_model.title_search = ActiveValue::Set(search_key(title));
            active_model.title = ActiveValue::Set(title.clone());
        }
        if let Some(content) = &changes.content {
            active_model.content_search = ActiveValue::Set(search_key(content));
            active_model.content = ActiveValue::Set(content.clone());
        }
        if let Some(status) = changes.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(visible) = changes.visible {
            active_model.visible = ActiveValue::Set(visible);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(Post::from_entity(updated)))
    }

    /// Deletes a post together with its comments, likes and tag links.
    ///
    /// # Returns
    /// - `Ok(true)` - The post existed and was deleted
    /// - `Ok(false)` - No post with this id
    pub async fn delete(&self, post_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::delete_by_id(post_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Post::find()
            .filter(entity::post::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Post::find().count(self.db).await
    }

    /// Number of posts that are published and visible.
    pub async fn count_public(&self) -> Result<u64, DbErr> {
        scoped(PostScope::Public).count(self.db).await
    }
}

fn scoped(scope: PostScope) -> Select<entity::post::Entity> {
    let query = entity::prelude::Post::find();

    match scope {
        PostScope::Public => query
            .filter(entity::post::Column::Status.eq(PostStatus::Published))
            .filter(entity::post::Column::Visible.eq(true)),
        PostScope::Author(author_id) => {
            query.filter(entity::post::Column::AuthorId.eq(author_id))
        }
        PostScope::All => query,
    }
}

/// Subquery selecting the ids of posts linked to the tag named `tag`.
fn ids_tagged(tag: &str) -> SelectStatement {
    entity::prelude::PostTag::find()
        .select_only()
        .column(entity::post_tag::Column::PostId)
        .join(JoinType::InnerJoin, entity::post_tag::Relation::Tag.def())
        .filter(entity::tag::Column::Name.eq(tag))
        .into_query()
}
