use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::AuthorDto;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AuditEntryDto {
    pub id: i32,
    pub action: String,
    pub entity: String,
    pub entity_id: i32,
    /// `None` once the acting user has been deleted.
    pub actor: Option<AuthorDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct PaginatedAuditDto {
    pub entries: Vec<AuditEntryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
