pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_post_table;
mod m20261001_000003_create_tag_tables;
mod m20261001_000004_create_comment_table;
mod m20261001_000005_create_post_like_table;
mod m20261001_000006_create_audit_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_post_table::Migration),
            Box::new(m20261001_000003_create_tag_tables::Migration),
            Box::new(m20261001_000004_create_comment_table::Migration),
            Box::new(m20261001_000005_create_post_like_table::Migration),
            Box::new(m20261001_000006_create_audit_log_table::Migration),
        ]
    }
}
