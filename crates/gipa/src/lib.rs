//! # Generalized inner pairing product argument
//!
//! Proves that the pairing inner product `Z = prod_i e(A[i], B[i])` of
//! two committed group-element vectors equals the value bound inside a
//! three-slot [`Commitment`](gipa_core::Commitment), with `O(log n)`
//! proof size.
//!
//! The protocol halves the instance each round:
//!
//! 1. Split `A`, `B` and the key at the midpoint; commit to the two
//!    cross inner products under the cross-wired half keys.
//! 2. Derive the round challenge `x` from the shared transcript.
//! 3. Fold `A` by `x`, `B` by `x^-1`, and the key to half length.
//!
//! After `log2(m)` rounds a single pairing check closes the argument.
//! The protocol is non-interactive: both sides derive identical
//! challenges from the hash-chained transcript, so a [`Proof`] is all
//! that ever crosses between them.

pub mod proof;
pub mod prover;
pub mod verifier;

pub use proof::Proof;
pub use prover::Prover;
pub use verifier::Verifier;

use gipa_core::group::pairing_inner_product;
use gipa_core::{Commitment, CommitmentKey, GipaResult, G1, G2};

/// Commits to the instance and assembles a matching prover/verifier
/// pair over it. The commitment binds the actual inner product of
/// `a` and `b`.
pub fn assemble_prover_verifier(
    m: u64,
    ck: &CommitmentKey,
    a: &[G1],
    b: &[G2],
) -> GipaResult<(Prover, Verifier)> {
    let z = pairing_inner_product(a, b)?;
    let com = Commitment::commit(ck, a, b, z)?;

    let prover = Prover::init(m, ck, a, b)?;
    let verifier = Verifier::init(m, ck, com)?;
    Ok((prover, verifier))
}
