use thiserror::Error;

/// Main error type for codeword operations.
///
/// Every variant is raised eagerly, before the offending operation has
/// touched any storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodewordError {
    /// A codeword was created or reset with a non-positive length.
    #[error("codeword length must be an integer greater than zero, got {length}")]
    InvalidLength { length: i64 },
    /// The codeword has no storage (never initialized, or moved out of).
    #[error("codeword is uninitialized")]
    Uninitialized,
    /// A bit index fell outside `[0, length)`.
    #[error("bit position {position} out of range for codeword of length {length}")]
    PositionOutOfRange { position: i64, length: usize },
    /// Two XOR operands had different lengths.
    #[error("codeword lengths must match ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}

/// A specialized `Result` type for codeword operations.
pub type Result<T> = std::result::Result<T, CodewordError>;
