use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        audit::AuditRepository, comment::CommentRepository, post::PostRepository,
        user::UserRepository,
    },
    error::AppError,
    model::admin::ForumStats,
};

/// Service behind the admin dashboard.
pub struct AdminService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects the site-wide counters.
    pub async fn stats(&self) -> Result<ForumStats, AppError> {
        let user_repo = UserRepository::new(self.db);
        let post_repo = PostRepository::new(self.db);

        Ok(ForumStats {
            users: user_repo.count().await?,
            active_users: user_repo.count_active().await?,
            posts: post_repo.count().await?,
            published_posts: post_repo.count_public().await?,
            comments: CommentRepository::new(self.db).count().await?,
            audit_entries: AuditRepository::new(self.db).count().await?,
        })
    }
}
