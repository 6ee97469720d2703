//! Tests for the migration history.
//!
//! The pure checks verify the registration invariants the runner
//! relies on. Schema-shape checks need a live PostgreSQL fixture and
//! document their procedure until that infrastructure exists.

use sea_orm_migration::{MigrationName, MigratorTrait};

use licensing_registry_migrator::migration::Migrator;

/// Every migration module must be registered exactly once.
#[test]
fn test_all_migrations_registered() {
    let migrations = Migrator::migrations();
    assert_eq!(migrations.len(), 24);

    let mut names: Vec<&str> = migrations.iter().map(|m| m.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 24, "duplicate migration registered");
}

/// The runner applies migrations in registration order; that order
/// must agree with the timestamped names.
#[test]
fn test_registration_order_matches_timestamps() {
    let names: Vec<String> = Migrator::migrations()
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

/// The history starts by creating the schema namespaces everything
/// else lands in.
#[test]
fn test_schema_creation_is_first() {
    let migrations = Migrator::migrations();
    let first = migrations.first().expect("empty migration history");
    assert!(first.name().ends_with("create_schemas"));
}

/// Test that applying all Up migrations yields the expected catalog.
#[test]
fn test_up_builds_expected_catalog() {
    // TODO: Implement when a PostgreSQL test fixture is set up
    // This test should:
    // 1. Start a disposable PostgreSQL database
    // 2. Run Migrator::up(&conn, None)
    // 3. Query information_schema for the look/org/tr/log tables
    // 4. Assert the two views tr."GetPrintType" and tr."LicenseView" exist
}

/// Test that Down then Up restores the same schema shape.
#[test]
fn test_down_then_up_is_idempotent() {
    // TODO: Implement when a PostgreSQL test fixture is set up
    // This test should:
    // 1. Run Migrator::up(&conn, None)
    // 2. Snapshot information_schema.columns for the four schemas
    // 3. Run Migrator::down(&conn, None) then up again
    // 4. Assert the snapshot matches
}

/// Test that re-running the guarded migrations is a no-op.
#[test]
fn test_guarded_migrations_rerun_as_noop() {
    // TODO: Implement when a PostgreSQL test fixture is set up
    // This test should:
    // 1. Run Migrator::up(&conn, None)
    // 2. Delete the seaql_migrations rows for the guarded migrations
    //    (merge_owner_addresses onward)
    // 3. Run Migrator::up(&conn, None) again
    // 4. Assert it succeeds and the schema shape is unchanged
}
