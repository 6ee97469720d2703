//! Migration: Create the per-entity audit tables.
//!
//! One append-only diff log per tracked entity, storing old/new value
//! pairs, the updater and a timestamp. Rows are written by the owning
//! application, not by triggers in this schema.

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
                CREATE TABLE log.company_details_audit (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    entity_id UUID NOT NULL,
                    field_name VARCHAR(100) NOT NULL,
                    old_value TEXT,
                    new_value TEXT,
                    updated_by VARCHAR(256),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_company_details_audit_entity_id
                    ON log.company_details_audit(entity_id);

                CREATE TABLE log.license_audit (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    entity_id UUID NOT NULL,
                    field_name VARCHAR(100) NOT NULL,
                    old_value TEXT,
                    new_value TEXT,
                    updated_by VARCHAR(256),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_license_audit_entity_id
                    ON log.license_audit(entity_id);

                CREATE TABLE log.property_audit (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    entity_id UUID NOT NULL,
                    field_name VARCHAR(100) NOT NULL,
                    old_value TEXT,
                    new_value TEXT,
                    updated_by VARCHAR(256),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_property_audit_entity_id
                    ON log.property_audit(entity_id);

                CREATE TABLE log.guarantor_audit (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    entity_id UUID NOT NULL,
                    field_name VARCHAR(100) NOT NULL,
                    old_value TEXT,
                    new_value TEXT,
                    updated_by VARCHAR(256),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_guarantor_audit_entity_id
                    ON log.guarantor_audit(entity_id);

                CREATE TABLE log.securities_audit (
                    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                    entity_id UUID NOT NULL,
                    field_name VARCHAR(100) NOT NULL,
                    old_value TEXT,
                    new_value TEXT,
                    updated_by VARCHAR(256),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_securities_audit_entity_id
                    ON log.securities_audit(entity_id);
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
                DROP TABLE IF EXISTS log.securities_audit CASCADE;
                DROP TABLE IF EXISTS log.guarantor_audit CASCADE;
                DROP TABLE IF EXISTS log.property_audit CASCADE;
                DROP TABLE IF EXISTS log.license_audit CASCADE;
                DROP TABLE IF EXISTS log.company_details_audit CASCADE;
                "#,
            )
            .await?;

        Ok(())
    }
}
