//! Migration: Create guarantors and their guarantee child table.
//!
//! Guarantee rows are later folded into guarantee-specific columns on
//! the guarantor.

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
                CREATE TABLE org.guarantors (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    company_id UUID NOT NULL
                        REFERENCES org.company_details(id) ON DELETE CASCADE,
                    first_name VARCHAR(100) NOT NULL,
                    last_name VARCHAR(100),
                    father_name VARCHAR(100),
                    identity_card_type_id UUID
                        REFERENCES look.identity_card_type(id) ON DELETE SET NULL,
                    tazkira_number VARCHAR(100),
                    tazkira_volume VARCHAR(50),
                    tazkira_page VARCHAR(50),
                    tazkira_record VARCHAR(50),
                    phone VARCHAR(50),
                    location_id UUID
                        REFERENCES look.location(id) ON DELETE SET NULL,
                    street VARCHAR(255),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_guarantors_company_id
                    ON org.guarantors(company_id);

                CREATE TABLE org.guarantees (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    guarantor_id UUID NOT NULL
                        REFERENCES org.guarantors(id) ON DELETE CASCADE,
                    guarantee_type_id UUID
                        REFERENCES look.guarantee_type(id) ON DELETE SET NULL,
                    amount NUMERIC(18, 2),
                    currency VARCHAR(10),
                    deed_number VARCHAR(100),
                    deed_date DATE,
                    property_description TEXT,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_guarantees_guarantor_id
                    ON org.guarantees(guarantor_id);
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
                DROP TABLE IF EXISTS org.guarantees CASCADE;
                DROP TABLE IF EXISTS org.guarantors CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
