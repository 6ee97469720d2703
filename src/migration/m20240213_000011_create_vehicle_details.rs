//! Migration: Create the vehicle transaction record and its party
//! tables, mirroring the property counterparts.

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
                CREATE TABLE tr.vehicle_details (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    company_id UUID
                        REFERENCES org.company_details(id) ON DELETE SET NULL,
                    transaction_type_id UUID
                        REFERENCES look.transaction_type(id) ON DELETE RESTRICT,
                    plate_number VARCHAR(50),
                    engine_number VARCHAR(100),
                    chassis_number VARCHAR(100),
                    model VARCHAR(100),
                    model_year INTEGER,
                    color VARCHAR(50),
                    price NUMERIC(18, 2),
                    price_in_words VARCHAR(500),
                    created_by UUID
                        REFERENCES users(id) ON DELETE SET NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_vehicle_details_company_id
                    ON tr.vehicle_details(company_id);

                CREATE INDEX idx_vehicle_details_chassis_number
                    ON tr.vehicle_details(chassis_number);

                CREATE TABLE tr.vehicle_buyer_details (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    vehicle_id UUID NOT NULL
                        REFERENCES tr.vehicle_details(id) ON DELETE CASCADE,
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
                    is_authorized_agent BOOLEAN NOT NULL DEFAULT FALSE,
                    authorization_number VARCHAR(100),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_vehicle_buyer_details_vehicle_id
                    ON tr.vehicle_buyer_details(vehicle_id);

                CREATE TABLE tr.vehicle_seller_details (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    vehicle_id UUID NOT NULL
                        REFERENCES tr.vehicle_details(id) ON DELETE CASCADE,
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
                    is_authorized_agent BOOLEAN NOT NULL DEFAULT FALSE,
                    authorization_number VARCHAR(100),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_vehicle_seller_details_vehicle_id
                    ON tr.vehicle_seller_details(vehicle_id);

                CREATE TABLE tr.vehicle_witness_details (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    vehicle_id UUID NOT NULL
                        REFERENCES tr.vehicle_details(id) ON DELETE CASCADE,
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

                CREATE INDEX idx_vehicle_witness_details_vehicle_id
                    ON tr.vehicle_witness_details(vehicle_id);
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
                DROP TABLE IF EXISTS tr.vehicle_witness_details CASCADE;
                DROP TABLE IF EXISTS tr.vehicle_seller_details CASCADE;
                DROP TABLE IF EXISTS tr.vehicle_buyer_details CASCADE;
                DROP TABLE IF EXISTS tr.vehicle_details CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
