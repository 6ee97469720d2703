//! Migration: Fold owner address rows into flattened columns.
//!
//! The permanent/temporary rows of `org.company_owner_address` become
//! permanent_*/temporary_* columns on `org.company_owner`, then the
//! child table is dropped. Guarded so re-running against a database
//! where the fold already happened is a no-op.

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
                ALTER TABLE org.company_owner
                    ADD COLUMN IF NOT EXISTS permanent_location_id UUID
                        REFERENCES look.location(id) ON DELETE SET NULL,
                    ADD COLUMN IF NOT EXISTS permanent_street VARCHAR(255),
                    ADD COLUMN IF NOT EXISTS temporary_location_id UUID
                        REFERENCES look.location(id) ON DELETE SET NULL,
                    ADD COLUMN IF NOT EXISTS temporary_street VARCHAR(255);

                DO $$
                BEGIN
                    IF EXISTS (
                        SELECT 1 FROM information_schema.tables
                        WHERE table_schema = 'org'
                          AND table_name = 'company_owner_address'
                    ) THEN
                        UPDATE org.company_owner o
                        SET permanent_location_id = a.location_id,
                            permanent_street = a.street
                        FROM org.company_owner_address a
                        WHERE a.owner_id = o.id AND a.role = 'permanent';

                        UPDATE org.company_owner o
                        SET temporary_location_id = a.location_id,
                            temporary_street = a.street
                        FROM org.company_owner_address a
                        WHERE a.owner_id = o.id AND a.role = 'temporary';

                        DROP TABLE org.company_owner_address;
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
                CREATE TABLE IF NOT EXISTS org.company_owner_address (
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

                CREATE INDEX IF NOT EXISTS idx_company_owner_address_owner_id
                    ON org.company_owner_address(owner_id);

                INSERT INTO org.company_owner_address (owner_id, role, location_id, street)
                SELECT id, 'permanent', permanent_location_id, permanent_street
                FROM org.company_owner
                WHERE permanent_location_id IS NOT NULL OR permanent_street IS NOT NULL;

                INSERT INTO org.company_owner_address (owner_id, role, location_id, street)
                SELECT id, 'temporary', temporary_location_id, temporary_street
                FROM org.company_owner
                WHERE temporary_location_id IS NOT NULL OR temporary_street IS NOT NULL;

                ALTER TABLE org.company_owner
                    DROP COLUMN IF EXISTS temporary_street,
                    DROP COLUMN IF EXISTS temporary_location_id,
                    DROP COLUMN IF EXISTS permanent_street,
                    DROP COLUMN IF EXISTS permanent_location_id;
                "#,
            )
            .await?;

        Ok(())
    }
}
