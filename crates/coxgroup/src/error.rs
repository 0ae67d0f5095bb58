use thiserror::Error;

/// Error that can occur while constructing a group or enumerating cosets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// The matrix is not a valid Coxeter matrix (not square, not symmetric,
    /// diagonal entries other than 1, or off-diagonal entries below 2).
    #[error("invalid coxeter matrix")]
    BadMatrix,

    /// The matrix has more generators than a generator index can address.
    #[error("too many generators (max {})", crate::MAX_RANK)]
    TooManyGenerators,

    /// Enumeration produced more cosets than a coset index can address.
    #[error("too many cosets (max {})", u32::MAX)]
    TooManyCosets,

    /// The coset table still has unknown entries at finalization.
    #[error("incomplete coset table")]
    IncompleteTable,
}

/// Result type returned by group construction and coset enumeration.
pub type GroupResult<T> = Result<T, GroupError>;
