//! Migration: Create company owners and their address child table.
//!
//! Owner addresses start in a separate table keyed by role
//! (permanent/temporary); a later migration flattens them onto the
//! owner row.

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
                CREATE TABLE org.company_owner (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    company_id UUID NOT NULL
                        REFERENCES org.company_details(id) ON DELETE CASCADE,
                    first_name VARCHAR(100) NOT NULL,
                    last_name VARCHAR(100),
                    father_name VARCHAR(100),
                    grandfather_name VARCHAR(100),
                    education_level_id UUID
                        REFERENCES look.education_level(id) ON DELETE SET NULL,
                    identity_card_type_id UUID
                        REFERENCES look.identity_card_type(id) ON DELETE SET NULL,
                    tazkira_number VARCHAR(100),
                    tazkira_volume VARCHAR(50),
                    tazkira_page VARCHAR(50),
                    tazkira_record VARCHAR(50),
                    phone VARCHAR(50),
                    email VARCHAR(256),
                    photo_path VARCHAR(500),
                    share_percent NUMERIC(5, 2),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_company_owner_company_id
                    ON org.company_owner(company_id);

                CREATE TABLE org.company_owner_address (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    owner_id UUID NOT NULL
                        REFERENCES org.company_owner(id) ON DELETE CASCADE,
                    address_type_id UUID
                        REFERENCES look.address_type(id) ON DELETE SET NULL,
                    role VARCHAR(20) NOT NULL
                        CHECK (role IN ('permanent', 'temporary')),
                    location_id UUID
                        REFERENCES look.location(id) ON DELETE SET NULL,
                    street VARCHAR(255),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_company_owner_address_owner_id
                    ON org.company_owner_address(owner_id);
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
                DROP TABLE IF EXISTS org.company_owner_address CASCADE;
                DROP TABLE IF EXISTS org.company_owner CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
