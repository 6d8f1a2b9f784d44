use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Order not found")]
    NotFound,
    /// The store rejected or failed a statement; the enclosing transaction was
    /// rolled back.
    #[error("Storage error: {0}")]
    Storage(String),
    /// No connection could be obtained, or the worker running the query died.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
