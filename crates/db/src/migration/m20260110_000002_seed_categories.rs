//! Seeds the default spending categories.

use budgetbuddy_core::category::DEFAULT_CATEGORIES;
use sea_orm_migration::prelude::*;

use super::m20260110_000001_create_tables::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Categories::Table)
            .columns([Categories::Name, Categories::Icon]);
        for (name, icon) in DEFAULT_CATEGORIES {
            insert
                .values([name.into(), icon.into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names = DEFAULT_CATEGORIES.iter().map(|(name, _)| *name);
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Categories::Table)
                    .and_where(Expr::col(Categories::Name).is_in(names))
                    .to_owned(),
            )
            .await
    }
}
