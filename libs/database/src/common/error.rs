/// Error type for database health checks
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}
