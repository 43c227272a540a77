// Store error taxonomy

use thiserror::Error;

/// Errors surfaced by store operations.
///
/// A missing id is not an error: lookups by nonexistent id resolve to a
/// boolean `false` result at the operation that performed them.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input failed a precondition; the operation aborted before mutating.
    #[error("{0}")]
    Validation(String),

    /// Underlying storage read/write failed. Non-fatal: when returned from
    /// a mutating operation, the in-memory change has already been applied
    /// and stays authoritative for the session.
    #[error("storage failure: {0}")]
    Persistence(eyre::Report),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, StoreError::Persistence(_))
    }
}
