#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// A conditional status advance lost the race: the stored status no
    /// longer matched the expected one.
    #[error("conflict: {0}")]
    Conflict(String),
}
