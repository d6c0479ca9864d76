use thiserror::Error;

/// Failures surfaced by a single analysis run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Symbol outside {A,C,G,T}; `position` is 1-based
    #[error("Invalid symbol '{symbol}' at position {position}, expected one of A, C, G, T")]
    InvalidAlphabet { position: usize, symbol: char },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Analysis was cancelled")]
    Cancelled,
}

impl From<ScanError> for String {
    fn from(err: ScanError) -> Self {
        err.to_string()
    }
}
