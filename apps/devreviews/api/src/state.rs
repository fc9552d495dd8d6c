//! Application state management

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pool for the PostgreSQL catalog, absent when running in memory
    pub db: Option<DatabaseConnection>,
}
