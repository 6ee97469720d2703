//! Migration: Rename owner address columns to office/personal.
//!
//! RENAME COLUMN has no IF EXISTS form, so the renames run inside a
//! catalog-checked block to tolerate re-application.

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
                          AND column_name = 'permanent_location_id'
                    ) THEN
                        ALTER TABLE org.company_owner
                            RENAME COLUMN permanent_location_id TO office_location_id;
                        ALTER TABLE org.company_owner
                            RENAME COLUMN permanent_street TO office_street;
                        ALTER TABLE org.company_owner
                            RENAME COLUMN temporary_location_id TO personal_location_id;
                        ALTER TABLE org.company_owner
                            RENAME COLUMN temporary_street TO personal_street;
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
                          AND column_name = 'office_location_id'
                    ) THEN
                        ALTER TABLE org.company_owner
                            RENAME COLUMN office_location_id TO permanent_location_id;
                        ALTER TABLE org.company_owner
                            RENAME COLUMN office_street TO permanent_street;
                        ALTER TABLE org.company_owner
                            RENAME COLUMN personal_location_id TO temporary_location_id;
                        ALTER TABLE org.company_owner
                            RENAME COLUMN personal_street TO temporary_street;
                    END IF;
                END
                $$;
                "#,
            )
            .await?;

        Ok(())
    }
}
