//! KZG settings with commitments in G2, the mirror of [`crate::g1`]

use crate::witness;
use crate::{KzgError, KzgResult, Scalar, G1, G2};
use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;
use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_ff::Zero;

/// Reference-string powers in G2 plus the two-element verifying key in
/// G1.
///
/// `powers[i] = h * s^i` for the setup secret `s`; `vk = [g, g * s]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KzgG2Settings {
    /// Proving side: successive powers of the secret
    pub powers: Vec<G2>,
    /// Verifying side: the opposite-group generator and its secret multiple
    pub vk: [G1; 2],
}

impl KzgG2Settings {
    /// Wraps externally produced reference-string material
    pub fn new(powers: Vec<G2>, vk: [G1; 2]) -> Self {
        Self { powers, vk }
    }

    /// Largest committable polynomial degree
    pub fn max_degree(&self) -> usize {
        self.powers.len().saturating_sub(1)
    }

    /// Commits to the polynomial with the given coefficients
    pub fn commit(&self, coeffs: &[Scalar]) -> KzgResult<G2> {
        if coeffs.len() > self.powers.len() {
            return Err(KzgError::DegreeBoundExceeded);
        }
        if coeffs.is_empty() {
            return Ok(G2::zero());
        }

        let bases = G2::normalize_batch(&self.powers[..coeffs.len()]);
        G2::msm(&bases, coeffs).map_err(|_| KzgError::InvalidParameters("msm failed".to_string()))
    }

    /// Produces the single-point opening proof of `coeffs` at `point`
    pub fn open(&self, coeffs: &[Scalar], point: &Scalar) -> KzgResult<G2> {
        if coeffs.len() > self.powers.len() {
            return Err(KzgError::DegreeBoundExceeded);
        }

        let (quotient, _) = witness::quotient(coeffs, point)?;
        self.commit(&quotient)
    }

    /// Checks an opening proof:
    /// `e(g, C - value * h) == e(g_s - point * g, proof)`.
    pub fn verify(&self, commitment: &G2, proof: &G2, point: &Scalar, value: &Scalar) -> bool {
        if self.powers.is_empty() {
            return false;
        }

        let lhs_g2 = *commitment - self.powers[0] * *value;
        let rhs_g1 = self.vk[1] - self.vk[0] * *point;

        Bls12_381::pairing(self.vk[0].into_affine(), lhs_g2.into_affine())
            == Bls12_381::pairing(rhs_g1.into_affine(), proof.into_affine())
    }
}
