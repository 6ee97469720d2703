//! Migration: Add royalty, penalty and HR-letter fields to licenses.

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
                ALTER TABLE org.license_details
                    ADD COLUMN royalty_amount NUMERIC(18, 2),
                    ADD COLUMN royalty_paid_on DATE,
                    ADD COLUMN penalty_amount NUMERIC(18, 2),
                    ADD COLUMN penalty_reason VARCHAR(255),
                    ADD COLUMN violation_type_id UUID
                        REFERENCES look.violation_type(id) ON DELETE SET NULL,
                    ADD COLUMN hr_letter_number VARCHAR(100),
                    ADD COLUMN hr_letter_date DATE,
                    ADD COLUMN hr_letter_path VARCHAR(500);
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
                ALTER TABLE org.license_details
                    DROP COLUMN IF EXISTS hr_letter_path,
                    DROP COLUMN IF EXISTS hr_letter_date,
                    DROP COLUMN IF EXISTS hr_letter_number,
                    DROP COLUMN IF EXISTS violation_type_id,
                    DROP COLUMN IF EXISTS penalty_reason,
                    DROP COLUMN IF EXISTS penalty_amount,
                    DROP COLUMN IF EXISTS royalty_paid_on,
                    DROP COLUMN IF EXISTS royalty_amount;
                "#,
            )
            .await?;

        Ok(())
    }
}
