use thiserror::Error;

/// Ways an input can break the strictly-ascending contract.
///
/// Positions are zero-based and name the offending element, i.e. the one
/// that compared equal to or less than its predecessor.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("element at position {position} is less than its predecessor")]
    NotAscending { position: usize },

    #[error("element at position {position} duplicates its predecessor")]
    Duplicate { position: usize },
}

impl OrderError {
    /// Zero-based position of the offending element.
    pub fn position(&self) -> usize {
        match self {
            Self::NotAscending { position } | Self::Duplicate { position } => *position,
        }
    }
}

/// Convenience alias for order checks.
pub type OrderResult<T> = Result<T, OrderError>;
