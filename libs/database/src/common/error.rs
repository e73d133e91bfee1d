/// Error type for the database helpers that do not surface a raw `DbErr`
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}
