//! Migration: Create the company record.

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
                CREATE TABLE org.company_details (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    name VARCHAR(255) NOT NULL,
                    tin VARCHAR(50),
                    activity_type VARCHAR(150),
                    area_id UUID
                        REFERENCES look.area(id) ON DELETE SET NULL,
                    location_id UUID
                        REFERENCES look.location(id) ON DELETE SET NULL,
                    street VARCHAR(255),
                    phone VARCHAR(50),
                    email VARCHAR(256),
                    established_on DATE,
                    is_active BOOLEAN NOT NULL DEFAULT TRUE,
                    created_by UUID
                        REFERENCES users(id) ON DELETE SET NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_company_details_name ON org.company_details(name);

                CREATE UNIQUE INDEX idx_company_details_tin
                    ON org.company_details(tin)
                    WHERE tin IS NOT NULL;
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
                DROP TABLE IF EXISTS org.company_details CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
