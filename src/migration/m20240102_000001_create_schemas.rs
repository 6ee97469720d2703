//! Migration: Create the four schema namespaces.
//!
//! `look` holds reference data, `org` organizational entities,
//! `tr` transaction entities, and `log` the per-entity audit tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE SCHEMA IF NOT EXISTS look;
                CREATE SCHEMA IF NOT EXISTS org;
                CREATE SCHEMA IF NOT EXISTS tr;
                CREATE SCHEMA IF NOT EXISTS log;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP SCHEMA IF EXISTS log CASCADE;
                DROP SCHEMA IF EXISTS tr CASCADE;
                DROP SCHEMA IF EXISTS org CASCADE;
                DROP SCHEMA IF EXISTS look CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
