//! Migration: Create the hierarchical location table.
//!
//! Provinces, districts and villages share one table, discriminated by
//! `level` and linked through `parent_id`.

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
                CREATE TABLE look.location (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    name VARCHAR(150) NOT NULL,
                    code VARCHAR(20),
                    level VARCHAR(20) NOT NULL
                        CHECK (level IN ('province', 'district', 'village')),
                    parent_id UUID
                        REFERENCES look.location(id) ON DELETE CASCADE,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_location_parent_id ON look.location(parent_id);

                CREATE INDEX idx_location_level ON look.location(level);
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
                DROP TABLE IF EXISTS look.location CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
