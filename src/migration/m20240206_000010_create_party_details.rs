//! Migration: Create buyer, seller and witness tables for property
//! transactions.
//!
//! Each party carries identity-document (tazkira) fields, an address
//! reference, and authorized-agent metadata.

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
                CREATE TABLE tr.buyer_details (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    property_id UUID NOT NULL
                        REFERENCES tr.property_details(id) ON DELETE CASCADE,
                    first_name VARCHAR(100) NOT NULL,
                    last_name VARCHAR(100),
                    father_name VARCHAR(100),
                    grandfather_name VARCHAR(100),
                    identity_card_type_id UUID
                        REFERENCES look.identity_card_type(id) ON DELETE SET NULL,
                    tazkira_number VARCHAR(100),
                    tazkira_volume VARCHAR(50),
                    tazkira_page VARCHAR(50),
                    tazkira_record VARCHAR(50),
                    location_id UUID
                        REFERENCES look.location(id) ON DELETE SET NULL,
                    street VARCHAR(255),
                    phone VARCHAR(50),
                    share_percent NUMERIC(5, 2),
                    is_authorized_agent BOOLEAN NOT NULL DEFAULT FALSE,
                    authorization_number VARCHAR(100),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_buyer_details_property_id
                    ON tr.buyer_details(property_id);

                CREATE TABLE tr.seller_details (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    property_id UUID NOT NULL
                        REFERENCES tr.property_details(id) ON DELETE CASCADE,
                    first_name VARCHAR(100) NOT NULL,
                    last_name VARCHAR(100),
                    father_name VARCHAR(100),
                    grandfather_name VARCHAR(100),
                    identity_card_type_id UUID
                        REFERENCES look.identity_card_type(id) ON DELETE SET NULL,
                    tazkira_number VARCHAR(100),
                    tazkira_volume VARCHAR(50),
                    tazkira_page VARCHAR(50),
                    tazkira_record VARCHAR(50),
                    location_id UUID
                        REFERENCES look.location(id) ON DELETE SET NULL,
                    street VARCHAR(255),
                    phone VARCHAR(50),
                    share_percent NUMERIC(5, 2),
                    is_authorized_agent BOOLEAN NOT NULL DEFAULT FALSE,
                    authorization_number VARCHAR(100),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_seller_details_property_id
                    ON tr.seller_details(property_id);

                CREATE TABLE tr.witness_details (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    property_id UUID NOT NULL
                        REFERENCES tr.property_details(id) ON DELETE CASCADE,
                    witness_for VARCHAR(10) NOT NULL
                        CHECK (witness_for IN ('buyer', 'seller')),
                    first_name VARCHAR(100) NOT NULL,
                    last_name VARCHAR(100),
                    father_name VARCHAR(100),
                    identity_card_type_id UUID
                        REFERENCES look.identity_card_type(id) ON DELETE SET NULL,
                    tazkira_number VARCHAR(100),
                    tazkira_volume VARCHAR(50),
                    tazkira_page VARCHAR(50),
                    tazkira_record VARCHAR(50),
                    location_id UUID
                        REFERENCES look.location(id) ON DELETE SET NULL,
                    street VARCHAR(255),
                    phone VARCHAR(50),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_witness_details_property_id
                    ON tr.witness_details(property_id);
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
                DROP TABLE IF EXISTS tr.witness_details CASCADE;
                DROP TABLE IF EXISTS tr.seller_details CASCADE;
                DROP TABLE IF EXISTS tr.buyer_details CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
