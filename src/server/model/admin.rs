use crate::model::admin::StatsDto;

/// Site-wide counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForumStats {
    pub users: u64,
    pub active_users: u64,
    pub posts: u64,
    /// Posts that are published and visible.
    pub published_posts: u64,
    pub comments: u64,
    pub audit_entries: u64,
}

impl ForumStats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            users: self.users,
            active_users: self.active_users,
            posts: self.posts,
            published_posts: self.published_posts,
            comments: self.comments,
            audit_entries: self.audit_entries,
        }
    }
}
