//! Licensing Registry migration runner - Main entry point.
//!
//! Applies, reverts and reports on the schema migrations against the
//! configured PostgreSQL database.

mod config;
mod db;
mod error;
mod migration;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::migration::Migrator;

/// Supported runner commands.
enum Command {
    /// Apply all pending migrations
    Up,
    /// Revert the most recent migration, or everything with --all
    Down { all: bool },
    /// Report applied/pending state of every known migration
    Status,
    /// Drop all tables and re-apply from scratch (development only)
    Fresh,
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        match args.first().map(String::as_str) {
            Some("up") | None => Some(Command::Up),
            Some("down") => Some(Command::Down {
                all: args.iter().any(|a| a == "--all"),
            }),
            Some("status") => Some(Command::Status),
            Some("fresh") => Some(Command::Fresh),
            _ => None,
        }
    }
}

async fn run(command: Command, config: &Config) -> AppResult<()> {
    let conn = db::connect(config).await?;
    info!("Database connection established");

    match command {
        Command::Up => {
            let pending = Migrator::get_pending_migrations(&conn).await?.len();
            if pending == 0 {
                info!("No pending migrations");
            } else {
                info!("{} migration(s) pending", pending);
                Migrator::up(&conn, None).await?;
                info!("Migrations applied");
            }
        }
        Command::Down { all } => {
            if all {
                warn!("Reverting ALL applied migrations");
                Migrator::down(&conn, None).await?;
            } else {
                Migrator::down(&conn, Some(1)).await?;
            }
            info!("Revert complete");
        }
        Command::Status => {
            Migrator::status(&conn).await?;
        }
        Command::Fresh => {
            if !config.is_development() {
                return Err(AppError::Migration(
                    "'fresh' drops the whole catalog and is only allowed in development mode"
                        .to_string(),
                ));
            }
            warn!("Dropping all tables and re-applying every migration");
            Migrator::fresh(&conn).await?;
            info!("Fresh migration complete");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Some(cmd) => cmd,
        None => {
            error!("Unknown command: {}", args.join(" "));
            error!("Usage: licensing-registry-migrator [up|down [--all]|status|fresh]");
            std::process::exit(2);
        }
    };

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL must be set");
            error!("  - In production, values must not match development defaults");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Licensing Registry Migrator");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
        info!("Using development default for DATABASE_URL");
    }

    if let Err(e) = run(command, &config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
