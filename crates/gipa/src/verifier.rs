//! Recursion verifier

use crate::Proof;
use ark_ff::Field;
use gipa_core::group::pairing;
use gipa_core::utils::{is_power_of_two, num_rounds};
use gipa_core::{Commitment, CommitmentKey, GipaError, GipaResult, Scalar, Transcript, G1, G2};

/// Owned verifier state for one verification.
///
/// Holds the full commitment key and folds it alongside the running
/// commitment; the KZG-compressed variant replaces the key folding
/// with two polynomial openings.
#[derive(Clone, Debug)]
pub struct Verifier {
    /// Current instance size
    pub m: u64,
    /// Commitment key, folded each round
    pub ck: CommitmentKey,
    /// Running commitment to the (implicit) folded instance
    pub com: Commitment,
    /// Running Fiat-Shamir state
    pub transcript: Transcript,
    /// Round challenges in derivation order
    pub challenges: Vec<Scalar>,
}

impl Verifier {
    /// Validates the instance shape and takes a deep copy of the key.
    pub fn init(m: u64, ck: &CommitmentKey, com: Commitment) -> GipaResult<Self> {
        if !is_power_of_two(m) {
            return Err(GipaError::NotPowerOfTwo(m));
        }
        if ck.m != m {
            return Err(GipaError::SizeMismatch {
                expected: m as usize,
                actual: ck.len(),
            });
        }

        Ok(Self {
            m,
            ck: ck.clone(),
            com,
            transcript: Transcript::new(),
            challenges: Vec::new(),
        })
    }

    /// Replays the challenge chain against the proof's round
    /// commitments, folding the running commitment and key, then runs
    /// the final pairing check.
    ///
    /// Never panics; any inconsistency, including a malformed proof
    /// shape, yields `false`.
    pub fn verify(&mut self, proof: &Proof) -> bool {
        if proof.l.len() != proof.r.len() {
            return false;
        }
        if proof.num_rounds() != num_rounds(self.m) {
            return false;
        }

        let mut round = 0;
        while self.m > 1 {
            let (com_l, com_r) = proof.at(round);
            let x = match self.transcript.round_challenge(com_l, com_r) {
                Ok(x) => x,
                Err(_) => return false,
            };
            let x_inv = match x.inverse() {
                Some(x_inv) => x_inv,
                None => return false,
            };

            self.com = Commitment::fold(&x, &x_inv, com_l, &self.com, com_r);
            self.ck = match self.ck.fold(&x, &x_inv) {
                Ok(ck) => ck,
                Err(_) => return false,
            };
            self.challenges.push(x);
            self.m /= 2;
            round += 1;
        }

        self.check(&proof.a, &proof.b)
    }

    /// Terminal check: the proof's final elements, committed under the
    /// fully folded key with their own pairing as the claimed inner
    /// product, must reproduce the folded running commitment.
    fn check(&self, a: &G1, b: &G2) -> bool {
        let z = pairing(a, b);
        match Commitment::commit(&self.ck, std::slice::from_ref(a), std::slice::from_ref(b), z) {
            Ok(com) => com == self.com,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assemble_prover_verifier, Prover};
    use ark_ff::Zero;
    use ark_std::test_rng;
    use ark_std::UniformRand;
    use gipa_core::group::pairing_inner_product;
    use gipa_core::utils::{random_g1_vec, random_g2_vec};
    use gipa_core::Target;

    fn random_instance(m: u64) -> (CommitmentKey, Vec<G1>, Vec<G2>) {
        let mut rng = test_rng();
        let alpha = Scalar::rand(&mut rng);
        let beta = Scalar::rand(&mut rng);
        let g = G1::rand(&mut rng);
        let h = G2::rand(&mut rng);
        let ck = CommitmentKey::setup(m, &alpha, &beta, &g, &h).unwrap();
        let a = random_g1_vec(&mut rng, m as usize);
        let b = random_g2_vec(&mut rng, m as usize);
        (ck, a, b)
    }

    fn round_trip(m: u64) -> bool {
        let (ck, a, b) = random_instance(m);
        let (mut prover, mut verifier) = assemble_prover_verifier(m, &ck, &a, &b).unwrap();
        let proof = prover.prove().unwrap();
        verifier.verify(&proof)
    }

    #[test]
    fn test_round_trip_small_sizes() {
        for log_m in 0..=6 {
            assert!(round_trip(1 << log_m), "failed at m = {}", 1 << log_m);
        }
    }

    #[test]
    #[ignore = "slow: full 2^10 instance"]
    fn test_round_trip_large() {
        assert!(round_trip(1 << 10));
    }

    #[test]
    fn test_terminal_instance_checks_initial_commitment() {
        let (ck, a, b) = random_instance(1);
        let (mut prover, mut verifier) = assemble_prover_verifier(1, &ck, &a, &b).unwrap();
        let proof = prover.prove().unwrap();

        assert!(proof.l.is_empty() && proof.r.is_empty());
        assert!(verifier.verify(&proof));
    }

    #[test]
    fn test_tampered_round_commitment_rejected() {
        let m = 8u64;
        let (ck, a, b) = random_instance(m);
        let (mut prover, verifier) = assemble_prover_verifier(m, &ck, &a, &b).unwrap();
        let proof = prover.prove().unwrap();

        for round in 0..proof.num_rounds() {
            for slot in 0..3 {
                let mut bad = proof.clone();
                bad.l[round].0[slot] = bad.l[round].0[slot] + bad.l[round].0[slot];
                assert!(
                    !verifier.clone().verify(&bad),
                    "tampered L slot {slot} of round {round} accepted"
                );

                let mut bad = proof.clone();
                bad.r[round].0[slot] = bad.r[round].0[slot] + bad.r[round].0[slot];
                assert!(
                    !verifier.clone().verify(&bad),
                    "tampered R slot {slot} of round {round} accepted"
                );
            }
        }
    }

    #[test]
    fn test_tampered_final_elements_rejected() {
        let m = 8u64;
        let (ck, a, b) = random_instance(m);
        let (mut prover, verifier) = assemble_prover_verifier(m, &ck, &a, &b).unwrap();
        let proof = prover.prove().unwrap();

        let mut bad = proof.clone();
        bad.a = bad.a + bad.a;
        assert!(!verifier.clone().verify(&bad));

        let mut bad = proof;
        bad.b = bad.b + bad.b;
        assert!(!verifier.clone().verify(&bad));
    }

    #[test]
    fn test_wrong_round_count_rejected() {
        let m = 8u64;
        let (ck, a, b) = random_instance(m);
        let (mut prover, verifier) = assemble_prover_verifier(m, &ck, &a, &b).unwrap();
        let proof = prover.prove().unwrap();

        let mut bad = proof.clone();
        bad.l.pop();
        bad.r.pop();
        assert!(!verifier.clone().verify(&bad));

        let mut bad = proof.clone();
        bad.r.pop();
        assert!(!verifier.clone().verify(&bad));
    }

    #[test]
    fn test_corrupted_claimed_inner_product_rejected() {
        // Committing to a wrong Z up front must surface at the final
        // pairing check.
        let m = 16u64;
        let (ck, a, b) = random_instance(m);

        let z = pairing_inner_product(&a, &b).unwrap();
        let corrupted: Target = z + z;
        let com = Commitment::commit(&ck, &a, &b, corrupted).unwrap();

        let mut prover = Prover::init(m, &ck, &a, &b).unwrap();
        let mut verifier = Verifier::init(m, &ck, com).unwrap();
        let proof = prover.prove().unwrap();
        assert!(!verifier.verify(&proof));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let m = 8u64;
        let (ck, a, b) = random_instance(m);
        let (mut prover, _) = assemble_prover_verifier(m, &ck, &a, &b).unwrap();
        let proof = prover.prove().unwrap();

        let mut rng = test_rng();
        let alpha = Scalar::rand(&mut rng);
        let beta = Scalar::rand(&mut rng);
        let g = G1::rand(&mut rng);
        let h = G2::rand(&mut rng);
        let other_ck = CommitmentKey::setup(m, &beta, &alpha, &g, &h).unwrap();

        let z = pairing_inner_product(&a, &b).unwrap();
        let com = Commitment::commit(&other_ck, &a, &b, z).unwrap();
        let mut verifier = Verifier::init(m, &other_ck, com).unwrap();

        // Proof was produced against a different key, so the replayed
        // fold lands on a different final commitment.
        assert!(!verifier.verify(&proof));
    }

    #[test]
    fn test_verifier_init_rejects_bad_configuration() {
        let (ck, _, _) = random_instance(4);
        let com = Commitment(std::array::from_fn(|_| Target::zero()));

        assert!(Verifier::init(3, &ck, com.clone()).is_err());
        assert!(Verifier::init(8, &ck, com).is_err());
    }

    // The protocol does not defend against zero- or one-valued round
    // challenges; a zero challenge would surface as a rejected proof
    // rather than a panic. This is a known soundness-boundary
    // condition with negligible probability, preserved by design.
    #[test]
    fn test_challenges_are_nonzero_in_practice() {
        let m = 16u64;
        let (ck, a, b) = random_instance(m);
        let (mut prover, _) = assemble_prover_verifier(m, &ck, &a, &b).unwrap();
        prover.prove().unwrap();
        assert!(prover.challenges.iter().all(|x| !x.is_zero()));
    }
}
