//! Migration: Fold guarantee rows into the guarantor.
//!
//! Each guarantor carries at most one guarantee in practice, so the
//! child table collapses into guarantee-specific columns.

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
                ALTER TABLE org.guarantors
                    ADD COLUMN IF NOT EXISTS guarantee_type_id UUID
                        REFERENCES look.guarantee_type(id) ON DELETE SET NULL,
                    ADD COLUMN IF NOT EXISTS guarantee_amount NUMERIC(18, 2),
                    ADD COLUMN IF NOT EXISTS guarantee_currency VARCHAR(10),
                    ADD COLUMN IF NOT EXISTS deed_number VARCHAR(100),
                    ADD COLUMN IF NOT EXISTS deed_date DATE,
                    ADD COLUMN IF NOT EXISTS property_description TEXT;

                DO $$
                BEGIN
                    IF EXISTS (
                        SELECT 1 FROM information_schema.tables
                        WHERE table_schema = 'org'
                          AND table_name = 'guarantees'
                    ) THEN
                        UPDATE org.guarantors g
                        SET guarantee_type_id = e.guarantee_type_id,
                            guarantee_amount = e.amount,
                            guarantee_currency = e.currency,
                            deed_number = e.deed_number,
                            deed_date = e.deed_date,
                            property_description = e.property_description
                        FROM org.guarantees e
                        WHERE e.guarantor_id = g.id;

                        DROP TABLE org.guarantees;
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
                CREATE TABLE IF NOT EXISTS org.guarantees (
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

                CREATE INDEX IF NOT EXISTS idx_guarantees_guarantor_id
                    ON org.guarantees(guarantor_id);

                INSERT INTO org.guarantees
                    (guarantor_id, guarantee_type_id, amount, currency,
                     deed_number, deed_date, property_description)
                SELECT id, guarantee_type_id, guarantee_amount, guarantee_currency,
                       deed_number, deed_date, property_description
                FROM org.guarantors
                WHERE guarantee_type_id IS NOT NULL
                   OR guarantee_amount IS NOT NULL
                   OR deed_number IS NOT NULL;

                ALTER TABLE org.guarantors
                    DROP COLUMN IF EXISTS property_description,
                    DROP COLUMN IF EXISTS deed_date,
                    DROP COLUMN IF EXISTS deed_number,
                    DROP COLUMN IF EXISTS guarantee_currency,
                    DROP COLUMN IF EXISTS guarantee_amount,
                    DROP COLUMN IF EXISTS guarantee_type_id;
                "#,
            )
            .await?;

        Ok(())
    }
}
