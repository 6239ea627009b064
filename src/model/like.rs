use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema, Debug)]
pub struct ToggleLikeDto {
    pub post_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LikeActionDto {
    Like,
    Unlike,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct LikeToggleDto {
    pub action: LikeActionDto,
    pub total_likes: u64,
    pub liked: bool,
}
