use crate::server::{
    data::user::UserRepository,
    model::user::{InsertUserParam, UserChanges},
};
use entity::user::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod delete;
mod email_taken;
mod find_credentials_by_email;
mod find_summaries;
mod get_all_paginated;
mod update;
