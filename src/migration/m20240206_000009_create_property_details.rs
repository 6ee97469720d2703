//! Migration: Create the central property transaction record.
//!
//! Workflow fields (status, verified_by, approved_by) and document
//! metadata are added by a later migration.

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
                CREATE TABLE tr.property_details (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    company_id UUID
                        REFERENCES org.company_details(id) ON DELETE SET NULL,
                    transaction_type_id UUID
                        REFERENCES look.transaction_type(id) ON DELETE RESTRICT,
                    property_type_id UUID
                        REFERENCES look.property_type(id) ON DELETE SET NULL,
                    -- used when the looked-up property type is 'Other'
                    custom_property_type VARCHAR(150),
                    punit_type_id UUID
                        REFERENCES look.punit_type(id) ON DELETE SET NULL,
                    unit_count NUMERIC(18, 2),
                    area_id UUID
                        REFERENCES look.area(id) ON DELETE SET NULL,
                    location_id UUID
                        REFERENCES look.location(id) ON DELETE SET NULL,
                    street VARCHAR(255),
                    deed_number VARCHAR(100),
                    deed_date DATE,
                    price NUMERIC(18, 2),
                    price_in_words VARCHAR(500),
                    created_by UUID
                        REFERENCES users(id) ON DELETE SET NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_property_details_company_id
                    ON tr.property_details(company_id);

                CREATE INDEX idx_property_details_created_at
                    ON tr.property_details(created_at DESC);
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
                DROP TABLE IF EXISTS tr.property_details CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
