//! Request and response DTOs of the JSON API.

pub mod admin;
pub mod api;
pub mod audit;
pub mod comment;
pub mod like;
pub mod post;
pub mod user;
