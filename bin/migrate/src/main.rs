//! RezGenie schema migrations: apply, revert and inspect.
//!
//! Reads `DATABASE_URL` (and the rest of the settings) from the environment
//! or a `.env` file, like the API server.

use clap::{Parser, Subcommand};
use eyre::{Result, bail};
use rezgenie_core::{RequestPolicy, Settings, telemetry};
use rezgenie_storage::{self as storage, migrate};

#[derive(Debug, Parser)]
#[command(name = "migrate", about = "Manage the RezGenie database schema")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply every pending migration.
    Up,
    /// Revert migrations: the newest one, or everything newer than `--to`.
    Down {
        /// Keep migrations up to and including this version (0 reverts all).
        #[arg(long)]
        to: Option<i64>,
    },
    /// List known migrations and whether each is applied.
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    telemetry::init(RequestPolicy::from_settings(&settings).debug);

    let pool = storage::connect(&settings.database_url).await?;
    tracing::info!("Connected to database");

    match cli.command {
        Command::Up => migrate::run(&pool).await?,
        Command::Down { to: Some(target) } => {
            let known = migrate::known_migrations();
            if target != 0 && !known.iter().any(|(version, _)| *version == target) {
                bail!("unknown migration version {target}");
            }
            migrate::revert_to(&pool, target).await?;
        }
        Command::Down { to: None } => match migrate::revert_last(&pool).await? {
            Some(version) => tracing::info!(version, "Reverted migration"),
            None => tracing::info!("Nothing to revert"),
        },
        Command::Status => {
            let applied = migrate::applied_versions(&pool).await?;
            for (version, description) in migrate::known_migrations() {
                tracing::info!(
                    version,
                    description = %description,
                    applied = applied.contains(&version),
                    "Migration"
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn down_accepts_an_optional_target() {
        let cli = Cli::try_parse_from(["migrate", "down", "--to", "20240101000000"]).unwrap();
        assert!(matches!(cli.command, Command::Down { to: Some(20240101000000) }));

        let cli = Cli::try_parse_from(["migrate", "down"]).unwrap();
        assert!(matches!(cli.command, Command::Down { to: None }));
    }
}
