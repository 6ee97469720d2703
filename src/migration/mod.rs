//! SeaORM database migrations.
//!
//! The migration history builds the licensing-registry catalog across
//! the `look`, `org`, `tr` and `log` schemas and evolves it through
//! the column renames, field relocations and table consolidations the
//! registry went through. Migrations run in registration order and are
//! tracked by the framework in `seaql_migrations`.

pub use sea_orm_migration::prelude::*;

mod m20240102_000001_create_schemas;
mod m20240102_000002_create_lookup_tables;
mod m20240102_000003_create_locations;
mod m20240109_000004_create_identity_tables;
mod m20240116_000005_create_company_details;
mod m20240116_000006_create_company_owners;
mod m20240123_000007_create_guarantors;
mod m20240130_000008_create_license_details;
mod m20240206_000009_create_property_details;
mod m20240206_000010_create_party_details;
mod m20240213_000011_create_vehicle_details;
mod m20240220_000012_create_securities_tables;
mod m20240227_000013_create_audit_tables;
mod m20240305_000014_extend_users;
mod m20240312_000015_add_property_workflow;
mod m20240319_000016_merge_owner_addresses;
mod m20240326_000017_rename_owner_address_roles;
mod m20240402_000018_move_property_fields_to_parties;
mod m20240409_000019_merge_guarantees;
mod m20240416_000020_extend_license_details;
mod m20240423_000021_move_property_fields_back;
mod m20240430_000022_rename_owner_address_current;
mod m20240507_000023_create_print_views;
mod m20240514_000024_harden_securities;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240102_000001_create_schemas::Migration),
            Box::new(m20240102_000002_create_lookup_tables::Migration),
            Box::new(m20240102_000003_create_locations::Migration),
            Box::new(m20240109_000004_create_identity_tables::Migration),
            Box::new(m20240116_000005_create_company_details::Migration),
            Box::new(m20240116_000006_create_company_owners::Migration),
            Box::new(m20240123_000007_create_guarantors::Migration),
            Box::new(m20240130_000008_create_license_details::Migration),
            Box::new(m20240206_000009_create_property_details::Migration),
            Box::new(m20240206_000010_create_party_details::Migration),
            Box::new(m20240213_000011_create_vehicle_details::Migration),
            Box::new(m20240220_000012_create_securities_tables::Migration),
            Box::new(m20240227_000013_create_audit_tables::Migration),
            Box::new(m20240305_000014_extend_users::Migration),
            Box::new(m20240312_000015_add_property_workflow::Migration),
            Box::new(m20240319_000016_merge_owner_addresses::Migration),
            Box::new(m20240326_000017_rename_owner_address_roles::Migration),
            Box::new(m20240402_000018_move_property_fields_to_parties::Migration),
            Box::new(m20240409_000019_merge_guarantees::Migration),
            Box::new(m20240416_000020_extend_license_details::Migration),
            Box::new(m20240423_000021_move_property_fields_back::Migration),
            Box::new(m20240430_000022_rename_owner_address_current::Migration),
            Box::new(m20240507_000023_create_print_views::Migration),
            Box::new(m20240514_000024_harden_securities::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_registered() {
        let migrations = Migrator::migrations();
        assert_eq!(migrations.len(), 24);
    }

    #[test]
    fn test_migration_names_unique() {
        let migrations = Migrator::migrations();
        let mut names: Vec<&str> = migrations.iter().map(|m| m.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), migrations.len());
    }

    /// Registration order must match timestamp order, since the runner
    /// applies migrations in the order they are registered.
    #[test]
    fn test_migrations_in_timestamp_order() {
        let migrations = Migrator::migrations();
        let names: Vec<&str> = migrations.iter().map(|m| m.name()).collect();
        for pair in names.windows(2) {
            assert!(
                pair[0] < pair[1],
                "migrations out of order: {} before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_migration_names_follow_convention() {
        for migration in Migrator::migrations() {
            let name = migration.name();
            assert!(name.starts_with('m'), "unexpected migration name: {}", name);
            // mYYYYMMDD_NNNNNN_<label>
            let digits: String = name.chars().skip(1).take(8).collect();
            assert!(
                digits.chars().all(|c| c.is_ascii_digit()),
                "missing date stamp in migration name: {}",
                name
            );
        }
    }
}
