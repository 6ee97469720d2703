//! Migration: Rename the office address columns to current.
//!
//! Second rename round on the owner address fields; the personal
//! columns keep their names.

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
                DO $$
                BEGIN
                    IF EXISTS (
                        SELECT 1 FROM information_schema.columns
                        WHERE table_schema = 'org'
                          AND table_name = 'company_owner'
                          AND column_name = 'office_location_id'
                    ) THEN
                        ALTER TABLE org.company_owner
                            RENAME COLUMN office_location_id TO current_location_id;
                        ALTER TABLE org.company_owner
                            RENAME COLUMN office_street TO current_street;
                    END IF;
                END
                $$;
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
                DO $$
                BEGIN
                    IF EXISTS (
                        SELECT 1 FROM information_schema.columns
                        WHERE table_schema = 'org'
                          AND table_name = 'company_owner'
                          AND column_name = 'current_location_id'
                    ) THEN
                        ALTER TABLE org.company_owner
                            RENAME COLUMN current_location_id TO office_location_id;
                        ALTER TABLE org.company_owner
                            RENAME COLUMN current_street TO office_street;
                    END IF;
                END
                $$;
                "#,
            )
            .await?;

        Ok(())
    }
}
