use thiserror::Error;

/// Errors surfaced by [`GoalStore`](crate::store::GoalStore).
///
/// Bad user input never produces one of these; it degrades to a no-op or a
/// clamped value instead. Only the persistence port and the stored data
/// itself can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistence port failed to load or save.
    #[error("persistence error: {0:#}")]
    Persistence(#[from] anyhow::Error),

    /// Stored data is not a valid JSON goal list.
    #[error("serialization error: {0}")]
    Codec(#[from] serde_json::Error),

    /// A stored record parsed but breaks a goal invariant.
    #[error("invalid goal record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
