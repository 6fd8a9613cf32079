use thiserror::Error;

/// Failures reported by quote storage.
///
/// Every variant is an expected outcome of a violated precondition; none of
/// them is fatal and the store never retries or logs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Author or text was empty.
    #[error("invalid data")]
    InvalidData,
    /// A quote with the same author and text is already stored.
    #[error("already exists")]
    AlreadyExists,
    /// No quote matched the id, or the store is empty.
    #[error("not found")]
    NotFound,
}
