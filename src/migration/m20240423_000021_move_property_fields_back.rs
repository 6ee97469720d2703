//! Migration: Move property type and price fields back to the parent.
//!
//! Reverses the earlier relocation onto buyer/seller rows. The buyer
//! copy is canonical when backfilling the parent.

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
                ALTER TABLE tr.property_details
                    ADD COLUMN IF NOT EXISTS property_type_id UUID
                        REFERENCES look.property_type(id) ON DELETE SET NULL,
                    ADD COLUMN IF NOT EXISTS custom_property_type VARCHAR(150),
                    ADD COLUMN IF NOT EXISTS price NUMERIC(18, 2),
                    ADD COLUMN IF NOT EXISTS price_in_words VARCHAR(500);

                DO $$
                BEGIN
                    IF EXISTS (
                        SELECT 1 FROM information_schema.columns
                        WHERE table_schema = 'tr'
                          AND table_name = 'buyer_details'
                          AND column_name = 'property_type_id'
                    ) THEN
                        UPDATE tr.property_details p
                        SET property_type_id = b.property_type_id,
                            custom_property_type = b.custom_property_type,
                            price = b.price,
                            price_in_words = b.price_in_words
                        FROM tr.buyer_details b
                        WHERE b.property_id = p.id;

                        ALTER TABLE tr.buyer_details
                            DROP COLUMN price_in_words,
                            DROP COLUMN price,
                            DROP COLUMN custom_property_type,
                            DROP COLUMN property_type_id;

                        ALTER TABLE tr.seller_details
                            DROP COLUMN price_in_words,
                            DROP COLUMN price,
                            DROP COLUMN custom_property_type,
                            DROP COLUMN property_type_id;
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
                ALTER TABLE tr.buyer_details
                    ADD COLUMN IF NOT EXISTS property_type_id UUID
                        REFERENCES look.property_type(id) ON DELETE SET NULL,
                    ADD COLUMN IF NOT EXISTS custom_property_type VARCHAR(150),
                    ADD COLUMN IF NOT EXISTS price NUMERIC(18, 2),
                    ADD COLUMN IF NOT EXISTS price_in_words VARCHAR(500);

                ALTER TABLE tr.seller_details
                    ADD COLUMN IF NOT EXISTS property_type_id UUID
                        REFERENCES look.property_type(id) ON DELETE SET NULL,
                    ADD COLUMN IF NOT EXISTS custom_property_type VARCHAR(150),
                    ADD COLUMN IF NOT EXISTS price NUMERIC(18, 2),
                    ADD COLUMN IF NOT EXISTS price_in_words VARCHAR(500);

                UPDATE tr.buyer_details b
                SET property_type_id = p.property_type_id,
                    custom_property_type = p.custom_property_type,
                    price = p.price,
                    price_in_words = p.price_in_words
                FROM tr.property_details p
                WHERE b.property_id = p.id;

                UPDATE tr.seller_details s
                SET property_type_id = p.property_type_id,
                    custom_property_type = p.custom_property_type,
                    price = p.price,
                    price_in_words = p.price_in_words
                FROM tr.property_details p
                WHERE s.property_id = p.id;

                ALTER TABLE tr.property_details
                    DROP COLUMN IF EXISTS price_in_words,
                    DROP COLUMN IF EXISTS price,
                    DROP COLUMN IF EXISTS custom_property_type,
                    DROP COLUMN IF EXISTS property_type_id;
                "#,
            )
            .await?;

        Ok(())
    }
}
