use crate::server::{
    data::comment::CommentRepository,
    model::comment::{CreateCommentParam, UpdateCommentParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_visible_for_post;
mod create;
mod get_all_paginated;
mod get_visible_for_post;
mod update;
