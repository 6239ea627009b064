use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct StatsDto {
    pub users: u64,
    pub active_users: u64,
    pub posts: u64,
    pub published_posts: u64,
    pub comments: u64,
    pub audit_entries: u64,
}
