//! Audit log data repository.
//!
//! The log is append-only: this repository only inserts and reads.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{page_index, user},
    model::audit::{AuditEntry, GetAuditParam},
};

pub struct AuditRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditRepository<'a> {
    /// Creates a new AuditRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuditRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one entry to the audit log.
    ///
    /// # Arguments
    /// - `actor_id` - User performing the action
    /// - `action` - Action name such as `create`
    /// - `entity` - Entity name such as `post`
    /// - `entity_id` - Id of the affected row
    pub async fn create(
        &self,
        actor_id: i32,
        action: &str,
        entity: &str,
        entity_id: i32,
    ) -> Result<AuditEntry, DbErr> {
        let entity = entity::audit_log::ActiveModel {
            actor_id: ActiveValue::Set(Some(actor_id)),
            action: ActiveValue::Set(action.to_string()),
            entity: ActiveValue::Set(entity.to_string()),
            entity_id: ActiveValue::Set(entity_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AuditEntry::from_entity(entity))
    }

    /// Gets audit entries with pagination, newest first.
    ///
    /// A non-blank `param.search` matches entries whose actor's name or email contains
    /// it and, when it parses as a number, entries about that entity id.
    ///
    /// # Arguments
    /// - `param` - One-based page, page size, exact `action`/`entity` filters and search
    ///
    /// # Returns
    /// - `Ok((entries, total))` - Entries for the requested page and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        param: &GetAuditParam,
    ) -> Result<(Vec<AuditEntry>, u64), DbErr> {
        let mut query = entity::prelude::AuditLog::find()
            .order_by_desc(entity::audit_log::Column::CreatedAt)
            .order_by_desc(entity::audit_log::Column::Id);

        if let Some(action) = &param.action {
            query = query.filter(entity::audit_log::Column::Action.eq(action.as_str()));
        }
        if let Some(entity_name) = &param.entity {
            query = query.filter(entity::audit_log::Column::Entity.eq(entity_name.as_str()));
        }
        if let Some(text) = param.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let mut condition = Condition::any()
                .add(entity::audit_log::Column::ActorId.in_subquery(user::ids_matching(text)));
            if let Ok(entity_id) = text.parse::<i32>() {
                condition = condition.add(entity::audit_log::Column::EntityId.eq(entity_id));
            }
            query = query.filter(condition);
        }

        let paginator = query.paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page_index(param.page)).await?;

        Ok((
            entities.into_iter().map(AuditEntry::from_entity).collect(),
            total,
        ))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::AuditLog::find().count(self.db).await
    }
}
