use crate::server::{data::audit::AuditRepository, model::audit::GetAuditParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
