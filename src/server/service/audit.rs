//! Audit service.
//!
//! Recording is fire-and-forget from the caller's perspective: a failed insert is
//! logged and swallowed so the request that triggered it still succeeds.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{audit::AuditRepository, user::UserRepository},
    error::AppError,
    model::{
        audit::{AuditAction, AuditEntity, AuditEntryWithActor, GetAuditParam, PaginatedAuditEntries},
        page_count,
    },
};

pub struct AuditService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    /// Creates a new AuditService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuditService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry to the audit log.
    ///
    /// Never fails; database errors are logged at error level.
    ///
    /// # Arguments
    /// - `actor_id` - User who performed the action
    /// - `action` - What was done
    /// - `entity` - Kind of record affected
    /// - `entity_id` - Id of the affected record
    pub async fn record(
        &self,
        actor_id: i32,
        action: AuditAction,
        entity: AuditEntity,
        entity_id: i32,
    ) {
        let repo = AuditRepository::new(self.db);

        if let Err(e) = repo
            .create(actor_id, action.as_str(), entity.as_str(), entity_id)
            .await
        {
            tracing::error!(
                "Failed to record audit entry ({} {} {} by user {}): {}",
                action.as_str(),
                entity.as_str(),
                entity_id,
                actor_id,
                e
            );
        }
    }

    /// Lists audit entries with their actors, newest first.
    ///
    /// A non-empty `search` matches the actor's name or email and, when numeric,
    /// the affected entity id.
    ///
    /// # Returns
    /// - `Ok(PaginatedAuditEntries)` - Entries for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        param: GetAuditParam,
    ) -> Result<PaginatedAuditEntries, AppError> {
        let (entries, total) = AuditRepository::new(self.db).get_paginated(&param).await?;

        let actor_ids: Vec<i32> = entries
            .iter()
            .filter_map(|e| e.actor_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let actors = UserRepository::new(self.db)
            .find_summaries(&actor_ids)
            .await?;

        let entries = entries
            .into_iter()
            .map(|entry| AuditEntryWithActor {
                actor: entry.actor_id.and_then(|id| actors.get(&id).cloned()),
                entry,
            })
            .collect();

        Ok(PaginatedAuditEntries {
            entries,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: page_count(total, param.per_page),
        })
    }
}
