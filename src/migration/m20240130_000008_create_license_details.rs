//! Migration: Create the license lifecycle record.
//!
//! Royalty, penalty and HR-letter fields arrive in a later migration.

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
                CREATE TABLE org.license_details (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    company_id UUID NOT NULL
                        REFERENCES org.company_details(id) ON DELETE CASCADE,
                    license_number VARCHAR(100) NOT NULL,
                    license_type VARCHAR(50),
                    issue_date DATE,
                    expiry_date DATE,
                    status VARCHAR(20) NOT NULL DEFAULT 'draft'
                        CHECK (status IN ('draft', 'active', 'suspended', 'revoked', 'expired')),
                    fee_amount NUMERIC(18, 2),
                    issued_by UUID
                        REFERENCES users(id) ON DELETE SET NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_license_details_company_id
                    ON org.license_details(company_id);

                CREATE UNIQUE INDEX idx_license_details_license_number
                    ON org.license_details(license_number);

                CREATE INDEX idx_license_details_status
                    ON org.license_details(status);
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
                DROP TABLE IF EXISTS org.license_details CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
