//! Configuration management for the Kennel server
//!
//! Sources, lowest precedence first: the YAML file, `KENNEL_<SECTION>__<KEY>`
//! environment variables, then command line flags.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use kennel_common::KennelError;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::startup::LoggingConfig;

pub const DEFAULT_CONFIG_FILE: &str = "conf/application.yml";
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://kennel.db?mode=rwc";

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command(name = "kennel-server", about = "HTTP API for dog and breed records")]
pub struct Cli {
    /// Path of the YAML configuration file; a missing file is skipped
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,
    #[arg(short = 'a', long = "address")]
    pub address: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

fn config_error(e: config::ConfigError) -> KennelError {
    KennelError::ConfigError(e.to_string())
}

impl Configuration {
    /// Load configuration using the process arguments
    pub fn new() -> Result<Self, KennelError> {
        Self::load(&Cli::parse())
    }

    pub fn load(cli: &Cli) -> Result<Self, KennelError> {
        let mut builder = Config::builder()
            .add_source(config::File::with_name(&cli.config_file).required(false))
            .add_source(
                Environment::with_prefix("KENNEL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(v) = &cli.database_url {
            builder = builder
                .set_override("db.url", v.as_str())
                .map_err(config_error)?;
        }
        if let Some(v) = cli.port {
            builder = builder
                .set_override("server.port", i64::from(v))
                .map_err(config_error)?;
        }
        if let Some(v) = &cli.address {
            builder = builder
                .set_override("server.address", v.as_str())
                .map_err(config_error)?;
        }

        let config = builder.build().map_err(config_error)?;

        Ok(Configuration { config })
    }

    pub fn from_config(config: Config) -> Self {
        Configuration { config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int("server.port")
            .ok()
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    /// Prefix for the API routes, either empty or `/segment[/segment…]`
    pub fn server_context_path(&self) -> String {
        let path = self
            .config
            .get_string("server.context_path")
            .unwrap_or_default();
        let path = path.trim().trim_matches('/');

        if path.is_empty() {
            String::new()
        } else {
            format!("/{}", path)
        }
    }

    /// Number of HTTP workers, 0 leaves the choice to actix-web
    pub fn server_workers(&self) -> usize {
        self.config
            .get_int("server.workers")
            .ok()
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(0)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        let seconds = self
            .config
            .get_int("server.shutdown_timeout")
            .ok()
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECONDS);
        Duration::from_secs(seconds)
    }

    // ========================================================================
    // Logging Configuration
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string("logging.dir").ok(),
            self.config.get_bool("logging.console").unwrap_or(true),
            self.config.get_bool("logging.file").unwrap_or(true),
            self.config
                .get_string("logging.level")
                .unwrap_or("info".to_string()),
            self.config
                .get_string("logging.rotation")
                .unwrap_or("daily".to_string()),
        )
    }

    // ========================================================================
    // Database Configuration
    // ========================================================================

    pub fn database_url(&self) -> String {
        self.config
            .get_string("db.url")
            .unwrap_or(DEFAULT_DATABASE_URL.to_string())
    }

    /// Create missing tables at startup
    pub fn auto_create_schema(&self) -> bool {
        self.config.get_bool("db.auto_create_schema").unwrap_or(true)
    }

    fn pool_setting(&self, key: &str, default: u64) -> u64 {
        self.config
            .get_int(&format!("db.pool.{}", key))
            .ok()
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(default)
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let max_connections = self.pool_setting("max_connections", 10) as u32;
        let min_connections = self.pool_setting("min_connections", 1) as u32;
        let connect_timeout = self.pool_setting("connect_timeout", 30);
        let acquire_timeout = self.pool_setting("acquire_timeout", 8);
        let idle_timeout = self.pool_setting("idle_timeout", 600);
        let max_lifetime = self.pool_setting("max_lifetime", 1800);
        let sqlx_logging = self
            .config
            .get_bool("db.pool.sqlx_logging")
            .unwrap_or(false);

        let mut opt = ConnectOptions::new(self.database_url());

        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .max_lifetime(Duration::from_secs(max_lifetime))
            .sqlx_logging(sqlx_logging);

        tracing::info!(
            max_connections = max_connections,
            min_connections = min_connections,
            connect_timeout = connect_timeout,
            idle_timeout = idle_timeout,
            max_lifetime = max_lifetime,
            sqlx_logging = sqlx_logging,
            "Database connection pool configured"
        );

        opt
    }

    pub async fn database_connection(&self) -> anyhow::Result<DatabaseConnection> {
        let database_connection = Database::connect(self.connect_options()).await?;

        Ok(database_connection)
    }
}
