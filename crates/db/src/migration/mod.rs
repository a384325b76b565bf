//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration and written with the schema
//! builder so they run on PostgreSQL and SQLite alike.

pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_tables;
mod m20260110_000002_seed_categories;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_tables::Migration),
            Box::new(m20260110_000002_seed_categories::Migration),
        ]
    }
}
