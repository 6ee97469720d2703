//! Migration: Add application columns to the users table.
//!
//! Links an operator account to its company and records its coarse
//! role flags.

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
                ALTER TABLE users
                    ADD COLUMN company_id UUID
                        REFERENCES org.company_details(id) ON DELETE SET NULL,
                    ADD COLUMN license_type VARCHAR(50),
                    ADD COLUMN user_role VARCHAR(50),
                    ADD COLUMN is_admin BOOLEAN NOT NULL DEFAULT FALSE;

                CREATE INDEX idx_users_company_id ON users(company_id);
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
                DROP INDEX IF EXISTS idx_users_company_id;

                ALTER TABLE users
                    DROP COLUMN IF EXISTS is_admin,
                    DROP COLUMN IF EXISTS user_role,
                    DROP COLUMN IF EXISTS license_type,
                    DROP COLUMN IF EXISTS company_id;
                "#,
            )
            .await?;

        Ok(())
    }
}
