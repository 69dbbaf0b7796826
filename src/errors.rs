use thiserror::Error;

/// Error type for the transaction store boundary.
///
/// The insights engine itself never fails: every input, however
/// incomplete, yields a structurally complete report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("No transaction at index {index} (store holds {len})")]
    OutOfBounds { index: usize, len: usize },
}
