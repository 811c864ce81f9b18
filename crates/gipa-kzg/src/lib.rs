//! # KZG-compressed inner pairing product argument
//!
//! The plain argument makes the verifier hold and fold the entire
//! O(m)-sized commitment key just to learn its two final elements.
//! This variant removes the key from the verifier altogether: the
//! final folded key elements are, by an algebraic identity over the
//! repeated-squaring key structure, evaluations of an explicit
//! polynomial in the round challenges (the Halo polynomial) at the
//! reference string's secret point. The prover discloses both
//! elements together with single-point KZG opening proofs; the
//! verifier replays the recursion on commitments only, evaluates the
//! Halo polynomial at two transcript-derived points in O(log m) scalar
//! work, and checks the two openings against constant-size verifying
//! keys.
//!
//! The compressed prover produces bit-identical round commitments and
//! final elements to [`gipa::Prover`]; the extension changes only what
//! the verifier needs, not the statement being proved.

pub mod halo;
pub mod proof;
pub mod prover;
pub mod setup;
pub mod verifier;

pub use proof::Proof;
pub use prover::Prover;
pub use verifier::Verifier;

use gipa_core::group::pairing_inner_product;
use gipa_core::{Commitment, CommitmentKey, GipaError, G1, G2};
use kzg::{KzgError, KzgG1Settings, KzgG2Settings};
use thiserror::Error;

/// Configuration errors for the compressed argument
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GipaKzgError {
    /// Error from the underlying recursion or commitment layer
    #[error(transparent)]
    Core(#[from] GipaError),

    /// Error from the polynomial commitment primitive
    #[error(transparent)]
    Kzg(#[from] KzgError),

    /// Instance size must be a power of two
    #[error("instance size {0} is not a power of two")]
    NotPowerOfTwo(u64),

    /// Reference-string or vector length mismatch
    #[error("length mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A round challenge without a multiplicative inverse
    #[error("Fiat-Shamir challenge has no inverse")]
    DegenerateChallenge,
}

/// Result type for the compressed argument
pub type GipaKzgResult<T> = Result<T, GipaKzgError>;

/// Commits to the instance and assembles a matching prover/verifier
/// pair. The verifier receives only the commitment and the two
/// constant-size KZG verifying keys, never the commitment key.
pub fn assemble_prover_verifier(
    m: u64,
    ck: &CommitmentKey,
    kzg1: &KzgG1Settings,
    kzg2: &KzgG2Settings,
    a: &[G1],
    b: &[G2],
) -> GipaKzgResult<(Prover, Verifier)> {
    let z = pairing_inner_product(a, b)?;
    let com = Commitment::commit(ck, a, b, z)?;

    let prover = Prover::init(m, ck, kzg1, kzg2, a, b)?;
    let verifier = Verifier::init(m, kzg1, kzg2, com)?;
    Ok((prover, verifier))
}
