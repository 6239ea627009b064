use crate::server::data::tag::TagRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
mod set_post_tags;
