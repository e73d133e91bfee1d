//! Configuration for Products API

use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse_or, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub postgres: PostgresConfig,
    /// Apply pending migrations at startup (`RUN_MIGRATIONS`, default true)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let postgres = PostgresConfig::from_env()?;
        let run_migrations = env_parse_or("RUN_MIGRATIONS", true)?;

        if environment.is_production() && server.cors_allowed_origins.is_empty() {
            return Err(ConfigError::MissingEnvVar("CORS_ALLOWED_ORIGIN".to_string()));
        }

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            postgres,
            run_migrations,
        })
    }
}
