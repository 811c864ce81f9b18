//! The Halo polynomial
//!
//! For round challenges `x_1, ..., x_L` (round 1 first), define
//!
//! ```text
//! f(X) = prod_{i=1}^{L} (1 + x_{L-i+1} * X^(2^i))
//! ```
//!
//! Because the key holds the even powers `g * (alpha^2)^j`, folding it
//! through the recursion multiplies the exponent by exactly these
//! binomial factors: `f` evaluated at the reference-string secret
//! reproduces the fully folded key element. The `invert` form, with
//! each challenge replaced by its inverse, is the identity for the
//! `v` side of the key.

use crate::{GipaKzgError, GipaKzgResult};
use ark_ff::{Field, One, Zero};
use ark_poly::univariate::DensePolynomial;
use ark_poly::DenseUVPolynomial;
use gipa_core::Scalar;

/// Multiplies out the L binomial factors; each factor has a one at
/// degree zero and a single challenge coefficient at degree `2^i`.
/// An empty challenge list yields the constant-one polynomial, so the
/// m = 1 instance degenerates cleanly.
pub fn build_halo_poly(
    challenges: &[Scalar],
    invert: bool,
) -> GipaKzgResult<DensePolynomial<Scalar>> {
    let count = challenges.len();
    let mut f = DensePolynomial::from_coefficients_vec(vec![Scalar::one()]);

    for i in 0..count {
        let degree = 1usize << (i + 1);
        let x = challenges[count - i - 1];

        let mut coeffs = vec![Scalar::zero(); degree + 1];
        coeffs[0] = Scalar::one();
        coeffs[degree] = if invert {
            x.inverse().ok_or(GipaKzgError::DegenerateChallenge)?
        } else {
            x
        };

        let factor = DensePolynomial::from_coefficients_vec(coeffs);
        f = &f * &factor;
    }
    Ok(f)
}

/// Evaluates the Halo polynomial at `point` in O(L) scalar operations,
/// without materializing the coefficients.
pub fn evaluate_halo_poly(
    challenges: &[Scalar],
    point: &Scalar,
    invert: bool,
) -> GipaKzgResult<Scalar> {
    let count = challenges.len();
    let mut result = Scalar::one();

    for i in 0..count {
        let degree = 1u64 << (i + 1);
        let x = challenges[count - i - 1];
        let x = if invert {
            x.inverse().ok_or(GipaKzgError::DegenerateChallenge)?
        } else {
            x
        };
        result *= Scalar::one() + x * point.pow([degree]);
    }
    Ok(result)
}
