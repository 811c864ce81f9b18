//! Recursion prover

use crate::Proof;
use ark_ff::Field;
use gipa_core::group::{fold_g1, fold_g2, pairing_inner_product};
use gipa_core::utils::is_power_of_two;
use gipa_core::{Commitment, CommitmentKey, GipaError, GipaResult, Scalar, Transcript, G1, G2};

/// Owned prover state for one proof.
///
/// `prove` mutates the state through `log2(m)` halving rounds and
/// leaves it terminal at `m = 1`; a fresh or cloned prover is needed
/// for another proof. The KZG-compressed variant drives this same
/// state and reads the folded key and challenge list afterwards.
#[derive(Clone, Debug)]
pub struct Prover {
    /// Current instance size
    pub m: u64,
    /// Committed vector in G1, folded in place
    pub a: Vec<G1>,
    /// Committed vector in G2, folded in place
    pub b: Vec<G2>,
    /// Commitment key, folded alongside the vectors
    pub ck: CommitmentKey,
    /// Running Fiat-Shamir state
    pub transcript: Transcript,
    /// Round challenges in derivation order
    pub challenges: Vec<Scalar>,
}

impl Prover {
    /// Validates the instance shape and takes deep copies of the key
    /// and vectors.
    ///
    /// Fails on any configuration error: `m` not a power of two, or
    /// a key/vector length differing from `m`.
    pub fn init(m: u64, ck: &CommitmentKey, a: &[G1], b: &[G2]) -> GipaResult<Self> {
        if !is_power_of_two(m) {
            return Err(GipaError::NotPowerOfTwo(m));
        }
        if ck.m != m {
            return Err(GipaError::SizeMismatch {
                expected: m as usize,
                actual: ck.len(),
            });
        }
        if a.len() != m as usize {
            return Err(GipaError::SizeMismatch {
                expected: m as usize,
                actual: a.len(),
            });
        }
        if b.len() != m as usize {
            return Err(GipaError::SizeMismatch {
                expected: m as usize,
                actual: b.len(),
            });
        }

        Ok(Self {
            m,
            a: a.to_vec(),
            b: b.to_vec(),
            ck: ck.clone(),
            transcript: Transcript::new(),
            challenges: Vec::new(),
        })
    }

    /// One halving step: splits the vectors and key, and commits to
    /// the two cross inner products under the cross-wired half keys.
    /// The two half-commitments are independent and computed
    /// concurrently.
    fn round_commitments(&self) -> GipaResult<(Commitment, Commitment)> {
        let half = (self.m / 2) as usize;
        let (a_l, a_r) = self.a.split_at(half);
        let (b_l, b_r) = self.b.split_at(half);
        let (key_l, key_r) = self.ck.split();

        let (com_l, com_r) = rayon::join(
            || {
                let z_l = pairing_inner_product(a_r, b_l)?;
                Commitment::commit(&key_l, a_r, b_l, z_l)
            },
            || {
                let z_r = pairing_inner_product(a_l, b_r)?;
                Commitment::commit(&key_r, a_l, b_r, z_r)
            },
        );
        Ok((com_l?, com_r?))
    }

    /// Folds the vectors and key under the round challenge and halves
    /// the instance size.
    fn fold(&mut self, x: Scalar) -> GipaResult<()> {
        let x_inv = x.inverse().ok_or(GipaError::DegenerateChallenge)?;
        let half = (self.m / 2) as usize;
        let (a_l, a_r) = self.a.split_at(half);
        let (b_l, b_r) = self.b.split_at(half);

        let (a_next, b_next) = rayon::join(
            || fold_g1(&x, a_r, a_l),
            || fold_g2(&x_inv, b_r, b_l),
        );
        self.a = a_next?;
        self.b = b_next?;
        self.ck = self.ck.fold(&x, &x_inv)?;
        self.challenges.push(x);
        self.m /= 2;
        Ok(())
    }

    /// Runs the full recursion and emits the proof.
    ///
    /// Deterministic for a given initialized state: every challenge is
    /// derived from the transcript, no external randomness is drawn.
    pub fn prove(&mut self) -> GipaResult<Proof> {
        let mut l = Vec::new();
        let mut r = Vec::new();

        while self.m > 1 {
            let (com_l, com_r) = self.round_commitments()?;
            let x = self.transcript.round_challenge(&com_l, &com_r)?;
            l.push(com_l);
            r.push(com_r);
            self.fold(x)?;
        }

        Ok(Proof {
            l,
            r,
            a: self.a[0],
            b: self.b[0],
        })
    }
}
