//! Migration: Defensive hardening of the securities tables.
//!
//! Everything here is guarded so the migration is a no-op against a
//! database that already carries the constraints, including schemas
//! migrated by hand during the transition.

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
                CREATE UNIQUE INDEX IF NOT EXISTS idx_securities_control_serial_number
                    ON org.securities_control(serial_number);

                CREATE UNIQUE INDEX IF NOT EXISTS idx_petition_writer_registration_number
                    ON org.petition_writer_securities(registration_number);

                ALTER TABLE org.securities_distribution
                    ADD COLUMN IF NOT EXISTS is_returned BOOLEAN NOT NULL DEFAULT FALSE,
                    ADD COLUMN IF NOT EXISTS returned_on DATE;

                -- early batches stored serials as INTEGER; widen in place
                DO $$
                BEGIN
                    IF EXISTS (
                        SELECT 1 FROM information_schema.columns
                        WHERE table_schema = 'org'
                          AND table_name = 'petition_writer_securities'
                          AND column_name = 'start_serial'
                          AND data_type = 'integer'
                    ) THEN
                        ALTER TABLE org.petition_writer_securities
                            ALTER COLUMN start_serial TYPE BIGINT,
                            ALTER COLUMN end_serial TYPE BIGINT;
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
                ALTER TABLE org.securities_distribution
                    DROP COLUMN IF EXISTS returned_on,
                    DROP COLUMN IF EXISTS is_returned;

                DROP INDEX IF EXISTS org.idx_petition_writer_registration_number;
                DROP INDEX IF EXISTS org.idx_securities_control_serial_number;
                "#,
            )
            .await?;

        Ok(())
    }
}
