//! Audit log domain models.
//!
//! Entries are append-only. Actions and entities are stored as lowercase strings so
//! the admin listing can filter on them directly.

use chrono::{DateTime, Utc};

use crate::{
    model::audit::{AuditEntryDto, PaginatedAuditDto},
    server::model::user::UserSummary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEntity {
    User,
    Post,
    Comment,
}

impl AuditEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub id: i32,
    /// `None` once the acting user has been deleted.
    pub actor_id: Option<i32>,
    pub action: String,
    pub entity: String,
    pub entity_id: i32,
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn from_entity(entity: entity::audit_log::Model) -> Self {
        Self {
            id: entity.id,
            actor_id: entity.actor_id,
            action: entity.action,
            entity: entity.entity,
            entity_id: entity.entity_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntryWithActor {
    pub entry: AuditEntry,
    pub actor: Option<UserSummary>,
}

impl AuditEntryWithActor {
    /// Audit entries are only served to administrators, so actor emails are always shown.
    pub fn into_dto(self) -> AuditEntryDto {
        AuditEntryDto {
            id: self.entry.id,
            action: self.entry.action,
            entity: self.entry.entity,
            entity_id: self.entry.entity_id,
            actor: self.actor.map(|a| a.into_dto(true)),
            created_at: self.entry.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAuditEntries {
    pub entries: Vec<AuditEntryWithActor>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAuditEntries {
    pub fn into_dto(self) -> PaginatedAuditDto {
        PaginatedAuditDto {
            entries: self.entries.into_iter().map(|e| e.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Filters for the audit listing.
#[derive(Debug, Clone, Default)]
pub struct GetAuditParam {
    pub page: u64,
    pub per_page: u64,
    /// Exact action name, e.g. `delete`.
    pub action: Option<String>,
    /// Exact entity name, e.g. `post`.
    pub entity: Option<String>,
    /// Matches the actor's name or email, or the entity id when numeric.
    pub search: Option<String>,
}
