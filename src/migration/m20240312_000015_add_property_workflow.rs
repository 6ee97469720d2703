//! Migration: Add workflow and document metadata to property
//! transactions.

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
                ALTER TABLE tr.property_details
                    ADD COLUMN status VARCHAR(20) NOT NULL DEFAULT 'draft'
                        CHECK (status IN ('draft', 'submitted', 'verified', 'approved', 'rejected')),
                    ADD COLUMN verified_by UUID
                        REFERENCES users(id) ON DELETE SET NULL,
                    ADD COLUMN verified_at TIMESTAMPTZ,
                    ADD COLUMN approved_by UUID
                        REFERENCES users(id) ON DELETE SET NULL,
                    ADD COLUMN approved_at TIMESTAMPTZ,
                    ADD COLUMN rejection_reason TEXT,
                    ADD COLUMN document_number VARCHAR(100),
                    ADD COLUMN document_path VARCHAR(500),
                    ADD COLUMN document_issued_on DATE;

                CREATE INDEX idx_property_details_status
                    ON tr.property_details(status);
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
                DROP INDEX IF EXISTS tr.idx_property_details_status;

                ALTER TABLE tr.property_details
                    DROP COLUMN IF EXISTS document_issued_on,
                    DROP COLUMN IF EXISTS document_path,
                    DROP COLUMN IF EXISTS document_number,
                    DROP COLUMN IF EXISTS rejection_reason,
                    DROP COLUMN IF EXISTS approved_at,
                    DROP COLUMN IF EXISTS approved_by,
                    DROP COLUMN IF EXISTS verified_at,
                    DROP COLUMN IF EXISTS verified_by,
                    DROP COLUMN IF EXISTS status;
                "#,
            )
            .await?;

        Ok(())
    }
}
