use core_config::{AppInfo, FromEnv, app_info, env_optional, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `None` when `DATABASE_URL` is unset; the catalog is then kept in memory
    pub database: Option<PostgresConfig>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 unless set
        let database = env_optional("DATABASE_URL")
            .map(|_| PostgresConfig::from_env())
            .transpose()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            database,
        })
    }
}
