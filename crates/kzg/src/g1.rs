//! KZG settings with commitments in G1

use crate::witness;
use crate::{KzgError, KzgResult, Scalar, G1, G2};
use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;
use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_ff::Zero;

/// Reference-string powers in G1 plus the two-element verifying key in
/// G2.
///
/// `powers[i] = g * s^i` for the setup secret `s`; `vk = [h, h * s]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KzgG1Settings {
    /// Proving side: successive powers of the secret
    pub powers: Vec<G1>,
    /// Verifying side: the opposite-group generator and its secret multiple
    pub vk: [G2; 2],
}

impl KzgG1Settings {
    /// Wraps externally produced reference-string material
    pub fn new(powers: Vec<G1>, vk: [G2; 2]) -> Self {
        Self { powers, vk }
    }

    /// Largest committable polynomial degree
    pub fn max_degree(&self) -> usize {
        self.powers.len().saturating_sub(1)
    }

    /// Commits to the polynomial with the given coefficients
    /// (constant term first): `sum_i coeffs[i] * powers[i]`.
    pub fn commit(&self, coeffs: &[Scalar]) -> KzgResult<G1> {
        if coeffs.len() > self.powers.len() {
            return Err(KzgError::DegreeBoundExceeded);
        }
        if coeffs.is_empty() {
            return Ok(G1::zero());
        }

        let bases = G1::normalize_batch(&self.powers[..coeffs.len()]);
        G1::msm(&bases, coeffs).map_err(|_| KzgError::InvalidParameters("msm failed".to_string()))
    }

    /// Produces the single-point opening proof of `coeffs` at `point`:
    /// a commitment to the witness (f(X) - f(z)) / (X - z). The zero
    /// witness of a constant polynomial yields the identity.
    pub fn open(&self, coeffs: &[Scalar], point: &Scalar) -> KzgResult<G1> {
        if coeffs.len() > self.powers.len() {
            return Err(KzgError::DegreeBoundExceeded);
        }

        let (quotient, _) = witness::quotient(coeffs, point)?;
        self.commit(&quotient)
    }

    /// Checks an opening proof:
    /// `e(C - value * g, h) == e(proof, h_s - point * h)`.
    pub fn verify(&self, commitment: &G1, proof: &G1, point: &Scalar, value: &Scalar) -> bool {
        if self.powers.is_empty() {
            return false;
        }

        let lhs_g1 = *commitment - self.powers[0] * *value;
        let rhs_g2 = self.vk[1] - self.vk[0] * *point;

        Bls12_381::pairing(lhs_g1.into_affine(), self.vk[0].into_affine())
            == Bls12_381::pairing(proof.into_affine(), rhs_g2.into_affine())
    }
}
