use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{import_yaml, init_database, serve};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "cashback")]
#[command(about = "Cashback rewards API server and data tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    ///
    /// Settings not given on the command line come from `cashback.toml`
    /// and `CASHBACK_*` environment variables.
    Serve {
        /// Database URL
        ///
        /// Examples:
        ///   SQLite: sqlite:///path/to/cashback.sqlite
        ///   In memory: sqlite::memory:
        #[arg(short, long)]
        database_url: Option<String>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,
    },
    /// Initialize the database using migrations
    ///
    /// For SQLite, append `?mode=rwc` to create the file if it is missing.
    InitDb {
        /// Database URL
        #[arg(short, long, env = "CASHBACK_DATABASE_URL")]
        database_url: String,
    },
    /// Import cashback categories and purchases from a YAML file
    ///
    /// Purchases refer to categories by name. Categories that already
    /// exist are reused.
    Import {
        /// Path to the YAML file
        #[arg(short, long)]
        yaml_path: String,

        /// Database URL
        #[arg(short, long)]
        database_url: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { database_url, bind_address } => {
                let config = AppConfig::load()?.with_overrides(database_url, bind_address);
                serve(&config).await?;
            }
            Commands::InitDb { database_url } => {
                init_database(&database_url).await?;
            }
            Commands::Import { yaml_path, database_url } => {
                let config = AppConfig::load()?.with_overrides(database_url, None);
                import_yaml(&yaml_path, &config.database_url).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_without_flags() {
        let cli = Cli::try_parse_from(["cashback", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { database_url, bind_address } => {
                assert!(database_url.is_none());
                assert!(bind_address.is_none());
            }
            _ => panic!("Expected serve command"),
        }
    }

    #[test]
    fn test_parse_import() {
        let cli = Cli::try_parse_from([
            "cashback",
            "import",
            "--yaml-path",
            "data/seed.yaml",
            "--database-url",
            "sqlite::memory:",
        ])
        .unwrap();
        match cli.command {
            Commands::Import { yaml_path, database_url } => {
                assert_eq!(yaml_path, "data/seed.yaml");
                assert_eq!(database_url.as_deref(), Some("sqlite::memory:"));
            }
            _ => panic!("Expected import command"),
        }
    }
}
