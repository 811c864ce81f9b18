//! The three-slot pairing commitment
//!
//! A commitment to vectors A, B and a claimed inner product Z is the
//! triple (<A, v>, <w, B>, Z) in the target group, where (v, w) is a
//! [`CommitmentKey`]. Z is carried, not recomputed; binding it to the
//! actual inner product of A and B is the recursion's job.

use crate::group::pairing_inner_product;
use crate::keys::CommitmentKey;
use crate::utils::is_power_of_two;
use crate::{GipaError, GipaResult, Scalar, Target, G1, G2};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// Pairing commitment to (A, B, Z); equality is component-wise.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Commitment(pub [Target; 3]);

impl Commitment {
    /// Commits to `(a, b, z)` under `key`.
    ///
    /// Slot 0 is `<a, key.v>`, slot 1 is `<key.w, b>`, slot 2 passes
    /// `z` through unchanged. Both vectors must match the key length,
    /// which must be a power of two.
    pub fn commit(key: &CommitmentKey, a: &[G1], b: &[G2], z: Target) -> GipaResult<Self> {
        if !is_power_of_two(key.m) {
            return Err(GipaError::NotPowerOfTwo(key.m));
        }
        if a.len() != key.len() {
            return Err(GipaError::SizeMismatch {
                expected: key.len(),
                actual: a.len(),
            });
        }
        if b.len() != key.len() {
            return Err(GipaError::SizeMismatch {
                expected: key.len(),
                actual: b.len(),
            });
        }

        let (com_a, com_b) = rayon::join(
            || pairing_inner_product(a, &key.v),
            || pairing_inner_product(&key.w, b),
        );
        Ok(Self([com_a?, com_b?, z]))
    }

    /// Folds a commitment for the next recursion level:
    /// `left * x + mid + right * x_inv`, slot-wise.
    pub fn fold(x: &Scalar, x_inv: &Scalar, left: &Self, mid: &Self, right: &Self) -> Self {
        Self(std::array::from_fn(|i| {
            left.0[i] * *x + mid.0[i] + right.0[i] * *x_inv
        }))
    }

    /// The three target-group slots in protocol order
    pub fn slots(&self) -> &[Target; 3] {
        &self.0
    }
}
