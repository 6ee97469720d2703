//! Migration: Create the reporting views.
//!
//! "GetPrintType" resolves the printable property-type label,
//! substituting the transaction's custom label when the looked-up type
//! is 'Other'. "LicenseView" flattens a license with its company,
//! primary owner and location for print consumption. Names are quoted;
//! they are the contract the printing consumers depend on.

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
                CREATE OR REPLACE VIEW tr."GetPrintType" AS
                SELECT
                    pd.id AS property_id,
                    pd.deed_number,
                    pd.deed_date,
                    pd.price,
                    pd.price_in_words,
                    pt.id AS property_type_id,
                    CASE
                        WHEN pt.name ILIKE 'other' THEN pd.custom_property_type
                        ELSE pt.name
                    END AS print_type
                FROM tr.property_details pd
                LEFT JOIN look.property_type pt
                    ON pt.id = pd.property_type_id;

                CREATE OR REPLACE VIEW tr."LicenseView" AS
                SELECT
                    ld.id AS license_id,
                    ld.license_number,
                    ld.license_type,
                    ld.issue_date,
                    ld.expiry_date,
                    ld.status,
                    ld.royalty_amount,
                    ld.penalty_amount,
                    cd.id AS company_id,
                    cd.name AS company_name,
                    cd.tin,
                    cd.activity_type,
                    co.first_name AS owner_first_name,
                    co.last_name AS owner_last_name,
                    co.father_name AS owner_father_name,
                    co.tazkira_number AS owner_tazkira_number,
                    loc.name AS location_name,
                    parent.name AS province_name
                FROM org.license_details ld
                LEFT JOIN org.company_details cd
                    ON cd.id = ld.company_id
                LEFT JOIN org.company_owner co
                    ON co.company_id = cd.id
                LEFT JOIN look.location loc
                    ON loc.id = cd.location_id
                LEFT JOIN look.location parent
                    ON parent.id = loc.parent_id;
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
                DROP VIEW IF EXISTS tr."LicenseView";
                DROP VIEW IF EXISTS tr."GetPrintType";
                "#,
            )
            .await?;

        Ok(())
    }
}
