//! Compressed-argument verifier
//!
//! Holds no commitment key. The recursion is replayed on commitments
//! only; the final pairing check uses the proof's disclosed key
//! elements, whose correctness is in turn established by the two
//! Halo-polynomial opening checks against constant-size verifying
//! keys.

use crate::halo::evaluate_halo_poly;
use crate::{GipaKzgError, GipaKzgResult, Proof};
use ark_ff::Field;
use gipa_core::group::{compressed_bytes, pairing};
use gipa_core::utils::{is_power_of_two, num_rounds};
use gipa_core::{Commitment, CommitmentKey, Scalar, Transcript, G1, G2};
use kzg::{KzgG1Settings, KzgG2Settings};

/// Owned verifier state for one verification.
#[derive(Clone, Debug)]
pub struct Verifier {
    /// Current instance size
    pub m: u64,
    /// Running commitment to the (implicit) folded instance
    pub com: Commitment,
    /// Verifying settings over the G1 reference string
    pub kzg1: KzgG1Settings,
    /// Verifying settings over the G2 reference string
    pub kzg2: KzgG2Settings,
    /// Running Fiat-Shamir state
    pub transcript: Transcript,
    /// Round challenges in derivation order
    pub challenges: Vec<Scalar>,
}

impl Verifier {
    /// Validates the instance shape; no commitment key is taken.
    pub fn init(
        m: u64,
        kzg1: &KzgG1Settings,
        kzg2: &KzgG2Settings,
        com: Commitment,
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
            m,
            com,
            kzg1: kzg1.clone(),
            kzg2: kzg2.clone(),
            transcript: Transcript::new(),
            challenges: Vec::new(),
        })
    }

    /// Replays the challenge chain, folding commitments only, then
    /// checks the final pairing equation against the disclosed key
    /// elements and both polynomial openings. Any single failure fails
    /// the whole verification; never panics.
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
            self.challenges.push(x);
            self.m /= 2;
            round += 1;
        }

        let mut status = self.check(&proof.a, &proof.b, &proof.w, &proof.v);

        // Mirror the prover's transcript tail to recover the two
        // evaluation points.
        let mut data = match compressed_bytes(&proof.a) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        match compressed_bytes(&proof.b) {
            Ok(bytes) => data.extend(bytes),
            Err(_) => return false,
        }
        let point_a = self.transcript.absorb_and_challenge(&data);

        let data = match compressed_bytes(&proof.pi_w) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        let point_b = self.transcript.absorb_and_challenge(&data);

        let y_w = match evaluate_halo_poly(&self.challenges, &point_a, false) {
            Ok(value) => value,
            Err(_) => return false,
        };
        let y_v = match evaluate_halo_poly(&self.challenges, &point_b, true) {
            Ok(value) => value,
            Err(_) => return false,
        };

        status = status && self.kzg1.verify(&proof.w, &proof.pi_w, &point_a, &y_w);
        status = status && self.kzg2.verify(&proof.v, &proof.pi_v, &point_b, &y_v);
        status
    }

    /// Final pairing check with a length-1 key assembled from the
    /// proof's disclosed elements in place of a locally folded key.
    fn check(&self, a: &G1, b: &G2, w: &G1, v: &G2) -> bool {
        let ck = CommitmentKey {
            m: 1,
            v: vec![*v],
            w: vec![*w],
        };
        let z = pairing(a, b);
        match Commitment::commit(&ck, std::slice::from_ref(a), std::slice::from_ref(b), z) {
            Ok(com) => com == self.com,
            Err(_) => false,
        }
    }
}
