//! # KZG polynomial commitments over BLS12-381
//!
//! Single-point commit/open/verify for dense univariate polynomials,
//! in both source groups: [`KzgG1Settings`] commits in G1 and verifies
//! against a two-element G2 key, [`KzgG2Settings`] is the mirror
//! image. The two-sided form exists because the inner pairing product
//! argument discloses one folded key element per group and proves each
//! with an opening on its own side.

pub mod g1;
pub mod g2;

pub use g1::KzgG1Settings;
pub use g2::KzgG2Settings;

use thiserror::Error;

/// BLS12-381 scalar field element
pub type Scalar = ark_bls12_381::Fr;

/// First source group
pub type G1 = ark_bls12_381::G1Projective;

/// Second source group
pub type G2 = ark_bls12_381::G2Projective;

/// Errors from commitment and opening operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KzgError {
    /// Polynomial degree exceeds the reference string
    #[error("polynomial degree exceeds the reference string bound")]
    DegreeBoundExceeded,

    /// Reference string or key material is malformed
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Witness polynomial construction failed
    #[error("invalid opening: {0}")]
    InvalidOpening(String),
}

/// Result type for KZG operations
pub type KzgResult<T> = Result<T, KzgError>;

pub(crate) mod witness {
    //! Shared quotient-polynomial construction

    use super::{KzgError, KzgResult, Scalar};
    use ark_ff::{One, Zero};
    use ark_poly::univariate::{DenseOrSparsePolynomial, DensePolynomial};
    use ark_poly::{DenseUVPolynomial, Polynomial};

    /// Computes the witness q(X) = (f(X) - f(z)) / (X - z) for the
    /// opening of `coeffs` at `point`, together with the evaluation
    /// f(z). The division is exact by construction.
    pub fn quotient(coeffs: &[Scalar], point: &Scalar) -> KzgResult<(Vec<Scalar>, Scalar)> {
        let poly = DensePolynomial::from_coefficients_slice(coeffs);
        let value = poly.evaluate(point);

        let mut numerator = coeffs.to_vec();
        if let Some(constant) = numerator.first_mut() {
            *constant -= value;
        }

        let numerator = DensePolynomial::from_coefficients_vec(numerator);
        let divisor = DensePolynomial::from_coefficients_vec(vec![-*point, Scalar::one()]);

        let (quotient, remainder) = DenseOrSparsePolynomial::divide_with_q_and_r(
            &numerator.into(),
            &divisor.into(),
        )
        .ok_or_else(|| KzgError::InvalidOpening("division by zero polynomial".to_string()))?;

        if !remainder.coeffs().iter().all(|c| c.is_zero()) {
            return Err(KzgError::InvalidOpening(
                "witness division left a remainder".to_string(),
            ));
        }

        Ok((quotient.coeffs().to_vec(), value))
    }
}
