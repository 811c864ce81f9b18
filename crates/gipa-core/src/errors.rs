//! Error types for inner pairing product operations

use thiserror::Error;

/// Configuration and precondition errors.
///
/// These are produced synchronously by constructors and commitment
/// operations; a failed verification is never an error, only a `false`
/// return from `verify`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GipaError {
    /// Instance size must be a power of two
    #[error("instance size {0} is not a power of two")]
    NotPowerOfTwo(u64),

    /// Vector or key length mismatch
    #[error("length mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Inner products over empty vectors are undefined
    #[error("vectors must be non-empty")]
    EmptyVector,

    /// A Fiat-Shamir challenge without a multiplicative inverse.
    /// Occurs only with negligible probability; the fold degenerates
    /// rather than being re-sampled.
    #[error("Fiat-Shamir challenge has no inverse")]
    DegenerateChallenge,

    /// Canonical serialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for inner pairing product operations
pub type GipaResult<T> = Result<T, GipaError>;
