use sea_orm::DatabaseConnection;

use crate::server::{
    data::{like::LikeRepository, post::PostRepository},
    error::AppError,
    model::like::{LikeAction, LikeToggle},
    service::is_unique_violation,
};

pub struct LikeService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> LikeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Likes a post, or removes the like when the user already liked it.
    ///
    /// A unique index violation on insert means a concurrent request already stored
    /// the like, so it is reported as liked.
    ///
    /// # Arguments
    /// - `user_id` - User toggling the like
    /// - `post_id` - Post being liked
    ///
    /// # Returns
    /// - `Ok(LikeToggle)` - What happened and the post's like count afterwards
    /// - `Err(AppError::NotFound)` - Post missing, unpublished or hidden
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn toggle(&self, user_id: i32, post_id: i32) -> Result<LikeToggle, AppError> {
        let post = PostRepository::new(self.db).find_by_id(post_id).await?;
        if !post.is_some_and(|p| p.is_public()) {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        let like_repo = LikeRepository::new(self.db);

        let action = match like_repo.find(user_id, post_id).await? {
            Some(like_id) => {
                like_repo.delete(like_id).await?;
                LikeAction::Unlike
            }
            None => match like_repo.create(user_id, post_id).await {
                Ok(()) => LikeAction::Like,
                Err(e) if is_unique_violation(&e) => LikeAction::Like,
                Err(e) => return Err(e.into()),
            },
        };

        let total_likes = like_repo.count_for_post(post_id).await?;

        Ok(LikeToggle {
            action,
            total_likes,
            liked: action == LikeAction::Like,
        })
    }
}
