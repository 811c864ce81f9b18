//! Commitment-key construction, split, and fold
//!
//! A key of size `m` holds `w[i] = g * (alpha^2)^i` in G1 and
//! `v[i] = h * (beta^2)^i` in G2. The squared steps leave the odd
//! powers of the secrets free for the KZG reference string that the
//! compressed variant interleaves with the key.

use crate::group::{fold_g1, fold_g2};
use crate::utils::is_power_of_two;
use crate::{GipaError, GipaResult, Scalar, G1, G2};
use ark_ff::{Field, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rayon::prelude::*;

/// The two-sided commitment key.
///
/// Owned by a single prover or verifier state and folded in place to
/// half length each recursion round; [`Clone`] is the explicit deep
/// copy used wherever an independent mutable instance is required.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct CommitmentKey {
    /// Current key length, always a power of two
    pub m: u64,
    /// G2 side, paired against the committed vector A
    pub v: Vec<G2>,
    /// G1 side, paired against the committed vector B
    pub w: Vec<G1>,
}

impl CommitmentKey {
    /// Builds a key of size `m` from the two secret scalars and two
    /// base points produced by setup. The scalars are squared before
    /// the power walk.
    pub fn setup(m: u64, alpha: &Scalar, beta: &Scalar, g: &G1, h: &G2) -> GipaResult<Self> {
        if !is_power_of_two(m) {
            return Err(GipaError::NotPowerOfTwo(m));
        }

        let (w, v) = fill_powers(m, alpha.square(), beta.square(), g, h);
        Ok(Self { m, v, w })
    }

    /// Key length as a usize
    pub fn len(&self) -> usize {
        self.m as usize
    }

    /// True for the degenerate empty key (never produced by setup)
    pub fn is_empty(&self) -> bool {
        self.m == 0
    }

    /// Splits the key into two cross-wired halves:
    /// left = (v[..m/2], w[m/2..]), right = (v[m/2..], w[..m/2]).
    ///
    /// The cross-wiring makes the two half-commitments of a round
    /// bind the *cross* inner products A_R*B_L and A_L*B_R rather
    /// than the same-side halves.
    pub fn split(&self) -> (Self, Self) {
        let half = (self.m / 2) as usize;

        let left = Self {
            m: self.m / 2,
            v: self.v[..half].to_vec(),
            w: self.w[half..].to_vec(),
        };
        let right = Self {
            m: self.m / 2,
            v: self.v[half..].to_vec(),
            w: self.w[..half].to_vec(),
        };
        (left, right)
    }

    /// Folds the key to half length: `v' = x_inv * v_R + v_L`,
    /// `w' = x * w_R + w_L`.
    ///
    /// `x` and `x_inv` must be exact multiplicative inverses; no check
    /// is performed, the recursion is responsible.
    pub fn fold(&self, x: &Scalar, x_inv: &Scalar) -> GipaResult<Self> {
        let half = (self.m / 2) as usize;

        let v = fold_g2(x_inv, &self.v[half..], &self.v[..half])?;
        let w = fold_g1(x, &self.w[half..], &self.w[..half])?;
        Ok(Self { m: self.m / 2, v, w })
    }
}

/// Walks `w[i] = g * alpha_step^i`, `v[i] = h * beta_step^i` for
/// `i < bound`, sharded across the worker pool by index range. Each
/// range seeds its own running power at `step^start`, so ranges have
/// no cross dependency.
pub fn fill_powers(
    bound: u64,
    alpha_step: Scalar,
    beta_step: Scalar,
    g: &G1,
    h: &G2,
) -> (Vec<G1>, Vec<G2>) {
    let bound = bound as usize;
    let chunk = (bound / rayon::current_num_threads()).max(1);

    let mut w = vec![G1::zero(); bound];
    let mut v = vec![G2::zero(); bound];

    w.par_chunks_mut(chunk)
        .zip(v.par_chunks_mut(chunk))
        .enumerate()
        .for_each(|(index, (w_range, v_range))| {
            let start = (index * chunk) as u64;
            let mut a = alpha_step.pow([start]);
            let mut b = beta_step.pow([start]);
            for i in 0..w_range.len() {
                w_range[i] = *g * a;
                v_range[i] = *h * b;
                a *= alpha_step;
                b *= beta_step;
            }
        });

    (w, v)
}
