use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by every failing API request.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
    /// Field-level validation messages, only present for 400 responses caused by validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct MessageDto {
    pub message: String,
}
