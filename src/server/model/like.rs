use crate::model::like::{LikeActionDto, LikeToggleDto};

/// What a like toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Unlike,
}

/// Outcome of toggling a like on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
    pub action: LikeAction,
    /// Number of likes on the post after the toggle.
    pub total_likes: u64,
    /// Whether the user likes the post after the toggle.
    pub liked: bool,
}

impl LikeToggle {
    pub fn into_dto(self) -> LikeToggleDto {
        LikeToggleDto {
            action: match self.action {
                LikeAction::Like => LikeActionDto::Like,
                LikeAction::Unlike => LikeActionDto::Unlike,
            },
            total_likes: self.total_likes,
            liked: self.liked,
        }
    }
}
