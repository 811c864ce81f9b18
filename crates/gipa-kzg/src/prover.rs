//! Compressed-argument prover
//!
//! Runs the plain recursion unchanged, then closes the transcript
//! with the two Halo-polynomial commitments and openings. The folded
//! key the recursion leaves behind doubles as the consistency oracle:
//! the polynomial commitments must land exactly on its two remaining
//! elements.

use crate::halo::build_halo_poly;
use crate::{GipaKzgError, GipaKzgResult, Proof};
use ark_poly::DenseUVPolynomial;
use gipa_core::group::compressed_bytes;
use gipa_core::utils::is_power_of_two;
use gipa_core::{CommitmentKey, G1, G2};
use kzg::{KzgG1Settings, KzgG2Settings};

/// Owned prover state: the plain recursion plus the KZG proving
/// settings for both groups.
#[derive(Clone, Debug)]
pub struct Prover {
    /// The plain recursion this variant drives
    pub gipa: gipa::Prover,
    /// Proving settings over the G1 reference string
    pub kzg1: KzgG1Settings,
    /// Proving settings over the G2 reference string
    pub kzg2: KzgG2Settings,
}

impl Prover {
    /// Validates the instance shape, including the 2m - 1 length of
    /// both reference strings, and takes deep copies.
    pub fn init(
        m: u64,
        ck: &CommitmentKey,
        kzg1: &KzgG1Settings,
        kzg2: &KzgG2Settings,
        a: &[G1],
        b: &[G2],
    ) -> GipaKzgResult<Self> {
        if !is_power_of_two(m) {
            return Err(GipaKzgError::NotPowerOfTwo(m));
        }

        let srs_len = (2 * m - 1) as usize;
        if kzg1.powers.len() != srs_len {
            return Err(GipaKzgError::SizeMismatch {
                expected: srs_len,
                actual: kzg1.powers.len(),
            });
        }
        if kzg2.powers.len() != srs_len {
            return Err(GipaKzgError::SizeMismatch {
                expected: srs_len,
                actual: kzg2.powers.len(),
            });
        }

        Ok(Self {
            gipa: gipa::Prover::init(m, ck, a, b)?,
            kzg1: kzg1.clone(),
            kzg2: kzg2.clone(),
        })
    }

    /// Runs the recursion and appends the Halo-polynomial openings.
    ///
    /// Panics if a polynomial commitment disagrees with the folded key
    /// element it must equal; that is an internal defect of the key or
    /// reference string, never an adversarial condition.
    pub fn prove(&mut self) -> GipaKzgResult<Proof> {
        let base = self.gipa.prove()?;

        // First evaluation point: chain the final elements.
        let mut data = compressed_bytes(&base.a)?;
        data.extend(compressed_bytes(&base.b)?);
        let point_a = self.gipa.transcript.absorb_and_challenge(&data);

        let f_w = build_halo_poly(&self.gipa.challenges, false)?;
        let w = self.kzg1.commit(f_w.coeffs())?;
        let pi_w = self.kzg1.open(f_w.coeffs(), &point_a)?;
        assert_eq!(
            w, self.gipa.ck.w[0],
            "folded w key element does not match the Halo polynomial commitment"
        );

        // Second evaluation point: chain the first opening proof.
        let data = compressed_bytes(&pi_w)?;
        let point_b = self.gipa.transcript.absorb_and_challenge(&data);

        let f_v = build_halo_poly(&self.gipa.challenges, true)?;
        let v = self.kzg2.commit(f_v.coeffs())?;
        let pi_v = self.kzg2.open(f_v.coeffs(), &point_b)?;
        assert_eq!(
            v, self.gipa.ck.v[0],
            "folded v key element does not match the Halo polynomial commitment"
        );

        Ok(Proof {
            l: base.l,
            r: base.r,
            a: base.a,
            b: base.b,
            w,
            v,
            pi_w,
            pi_v,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup;
    use ark_std::test_rng;
    use ark_std::UniformRand;
    use gipa_core::utils::{num_rounds, random_g1_vec, random_g2_vec};
    use gipa_core::Scalar;

    fn random_instance(
        m: u64,
    ) -> (CommitmentKey, KzgG1Settings, KzgG2Settings, Vec<G1>, Vec<G2>) {
        let mut rng = test_rng();
        let alpha = Scalar::rand(&mut rng);
        let beta = Scalar::rand(&mut rng);
        let g = G1::rand(&mut rng);
        let h = G2::rand(&mut rng);
        let (ck, kzg1, kzg2) = setup(m, &alpha, &beta, &g, &h).unwrap();
        let a = random_g1_vec(&mut rng, m as usize);
        let b = random_g2_vec(&mut rng, m as usize);
        (ck, kzg1, kzg2, a, b)
    }

    #[test]
    fn test_prove_shape() {
        let m = 16u64;
        let (ck, kzg1, kzg2, a, b) = random_instance(m);
        let mut prover = Prover::init(m, &ck, &kzg1, &kzg2, &a, &b).unwrap();
        let proof = prover.prove().unwrap();

        assert_eq!(proof.num_rounds(), num_rounds(m));
        assert_eq!(prover.gipa.m, 1);
    }

    // The compression is a verifier-side optimization: the recursion
    // transcript must match the plain argument exactly.
    #[test]
    fn test_recursion_matches_plain_gipa() {
        let m = 32u64;
        let (ck, kzg1, kzg2, a, b) = random_instance(m);

        let mut compressed = Prover::init(m, &ck, &kzg1, &kzg2, &a, &b).unwrap();
        let mut plain = gipa::Prover::init(m, &ck, &a, &b).unwrap();

        let proof = compressed.prove().unwrap();
        let base = plain.prove().unwrap();

        assert_eq!(proof.l, base.l);
        assert_eq!(proof.r, base.r);
        assert_eq!(proof.a, base.a);
        assert_eq!(proof.b, base.b);
    }

    // The disclosed key elements are the recursion's folded key, which
    // the prover cross-checks against the polynomial commitments.
    #[test]
    fn test_disclosed_key_elements_are_folded_key() {
        let m = 8u64;
        let (ck, kzg1, kzg2, a, b) = random_instance(m);
        let mut prover = Prover::init(m, &ck, &kzg1, &kzg2, &a, &b).unwrap();
        let proof = prover.prove().unwrap();

        assert_eq!(proof.w, prover.gipa.ck.w[0]);
        assert_eq!(proof.v, prover.gipa.ck.v[0]);
    }

    #[test]
    fn test_init_rejects_bad_configuration() {
        let (ck, kzg1, kzg2, a, b) = random_instance(8);

        assert!(matches!(
            Prover::init(6, &ck, &kzg1, &kzg2, &a[..6], &b[..6]),
            Err(GipaKzgError::NotPowerOfTwo(6))
        ));

        // Reference string sized for m = 8 does not fit m = 4.
        let short_ck = CommitmentKey {
            m: 4,
            v: ck.v[..4].to_vec(),
            w: ck.w[..4].to_vec(),
        };
        assert!(matches!(
            Prover::init(4, &short_ck, &kzg1, &kzg2, &a[..4], &b[..4]),
            Err(GipaKzgError::SizeMismatch { .. })
        ));

        // Vector lengths are checked by the underlying recursion.
        assert!(Prover::init(8, &ck, &kzg1, &kzg2, &a[..4], &b).is_err());
    }
}
