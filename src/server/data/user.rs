//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, lookups, partial updates and the counters used by the
//! admin views, converting entity models to domain models at the boundary.

use std::collections::HashMap;

use chrono::Utc;
use entity::user::Role;
use sea_orm::{
    sea_query::SelectStatement, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait,
};

use crate::server::{
    data::{contains_pattern, page_index, search_key},
    model::user::{InsertUserParam, User, UserChanges, UserCredentials, UserSummary},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new, active user.
    ///
    /// # Arguments
    /// - `param` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on `email`
    pub async fn create(&self, param: InsertUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            name_search: ActiveValue::Set(
                param.name.as_deref().map(search_key).unwrap_or_default(),
            ),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by email for login.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User found
    /// - `Ok(None)` - No account uses this email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Checks whether an email is already registered.
    ///
    /// # Arguments
    /// - `email` - Email to look up
    /// - `exclude_user_id` - User to ignore, used when a user keeps their own email on update
    pub async fn email_taken(
        &self,
        email: &str,
        exclude_user_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(user_id) = exclude_user_id {
            query = query.filter(entity::user::Column::Id.ne(user_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Returns whether at least one administrator exists.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets users with pagination, newest first.
    ///
    /// # Arguments
    /// - `page` - One-based page number
    /// - `per_page` - Number of users to return per page
    /// - `search` - Optional case-insensitive match on name or email
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total matching user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
        search: Option<&str>,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id);

        if let Some(search) = search {
            query = query.filter(search_condition(search));
        }

        let paginator = query.paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(page)).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Loads author summaries for a set of user ids.
    ///
    /// Missing ids are simply absent from the returned map.
    pub async fn find_summaries(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, UserSummary>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|u| (u.id, UserSummary::from_entity(u)))
            .collect())
    }

    /// Applies a partial update to a user.
    ///
    /// Fields left as `None` keep their current value; `updated_at` is always refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with this id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, user_id: i32, changes: UserChanges) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();

        if let Some(name) = changes.name {
            active_model.name_search = ActiveValue::Set(search_key(&name));
            active_model.name = ActiveValue::Set(Some(name));
        }
        if let Some(email) = changes.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = changes.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(role) = changes.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(active) = changes.active {
            active_model.active = ActiveValue::Set(active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Deletes a user, cascading to their posts, comments and likes.
    ///
    /// # Returns
    /// - `Ok(true)` - The user existed and was deleted
    /// - `Ok(false)` - No user with this id
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Active.eq(true))
            .count(self.db)
            .await
    }
}

/// Matches users whose name or email contains `search`, ignoring case.
///
/// Emails are stored lowercased, so they are matched directly.
fn search_condition(search: &str) -> Condition {
    Condition::any()
        .add(entity::user::Column::NameSearch.like(contains_pattern(search)))
        .add(entity::user::Column::Email.like(contains_pattern(search)))
}

/// Subquery selecting the ids of users matched by [`search_condition`].
pub fn ids_matching(search: &str) -> SelectStatement {
    entity::prelude::User::find()
        .select_only()
        .column(entity::user::Column::Id)
        .filter(search_condition(search))
        .into_query()
}
