use thiserror::Error;

/// Infrastructure failures from the entity store.
///
/// These are the only hard errors in the system: a missing row is data, not
/// an error, and never surfaces here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection failed: {0}")]
    Connection(String),

    #[error("store query failed: {0}")]
    Query(String),

    #[error("stored row is corrupt: {0}")]
    Corrupt(String),
}

/// Errors surfaced by a resolution pipeline invocation.
///
/// A failed batch fetch aborts the whole invocation so callers get a visible
/// retry signal; missing references degrade to the basic shape instead.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
