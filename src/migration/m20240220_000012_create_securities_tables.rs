//! Migration: Create serialized-document tracking tables.
//!
//! Securities are pre-printed serialized documents; control rows track
//! received batches, distribution rows track hand-outs by serial range.

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
                CREATE TABLE org.securities_control (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    document_name VARCHAR(150) NOT NULL,
                    serial_number VARCHAR(100) NOT NULL UNIQUE,
                    start_serial BIGINT NOT NULL,
                    end_serial BIGINT NOT NULL,
                    quantity INTEGER NOT NULL,
                    received_on DATE,
                    received_by UUID
                        REFERENCES users(id) ON DELETE SET NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE TABLE org.securities_distribution (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    control_id UUID NOT NULL
                        REFERENCES org.securities_control(id) ON DELETE CASCADE,
                    company_id UUID
                        REFERENCES org.company_details(id) ON DELETE SET NULL,
                    start_serial BIGINT NOT NULL,
                    end_serial BIGINT NOT NULL,
                    distributed_on DATE,
                    distributed_by UUID
                        REFERENCES users(id) ON DELETE SET NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_securities_distribution_control_id
                    ON org.securities_distribution(control_id);

                CREATE TABLE org.petition_writer_securities (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    registration_number VARCHAR(100) NOT NULL UNIQUE,
                    first_name VARCHAR(100) NOT NULL,
                    last_name VARCHAR(100),
                    father_name VARCHAR(100),
                    tazkira_number VARCHAR(100),
                    location_id UUID
                        REFERENCES look.location(id) ON DELETE SET NULL,
                    start_serial BIGINT,
                    end_serial BIGINT,
                    issued_on DATE,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );
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
                DROP TABLE IF EXISTS org.petition_writer_securities CASCADE;
                DROP TABLE IF EXISTS org.securities_distribution CASCADE;
                DROP TABLE IF EXISTS org.securities_control CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
