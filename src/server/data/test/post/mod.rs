use crate::server::{
    data::post::PostRepository,
    model::post::{InsertPostParam, PostScope, UpdatePostParam},
};
use entity::post::PostStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_slug;
mod get_paginated;
mod slug_exists;
mod update;
