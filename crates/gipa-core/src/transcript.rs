//! Hash-chained Fiat-Shamir transcript
//!
//! The transcript is a 32-byte running digest of every protocol
//! message seen so far: each absorption replaces the state with
//! `Blake2b256(state || data)`. Prover and verifier must absorb the
//! same bytes in the same order or their challenge sequences diverge
//! and verification fails. The seed is the all-zero state.

use crate::commitment::Commitment;
use crate::group::compressed_bytes;
use crate::{GipaResult, Scalar};
use ark_ff::PrimeField;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

/// Running Fiat-Shamir state shared (by construction, not by
/// reference) between prover and verifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    state: [u8; 32],
}

impl Transcript {
    /// Fresh transcript with the all-zero seed
    pub fn new() -> Self {
        Self { state: [0u8; 32] }
    }

    /// Chains `data` into the state: `state = H(state || data)`
    pub fn absorb(&mut self, data: &[u8]) {
        let mut hasher = Blake2b256::new();
        hasher.update(self.state);
        hasher.update(data);
        self.state.copy_from_slice(&hasher.finalize());
    }

    /// Derives a scalar challenge from the current state.
    ///
    /// The 32-byte state is widened to 64 bytes with an extension hash
    /// before reduction, for a near-uniform field element.
    pub fn challenge_scalar(&self) -> Scalar {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&self.state);

        let mut extender = Blake2b256::new();
        extender.update(self.state);
        extender.update(b"extend");
        bytes[32..].copy_from_slice(&extender.finalize());

        Scalar::from_le_bytes_mod_order(&bytes)
    }

    /// Absorbs `data` and immediately derives the next challenge
    pub fn absorb_and_challenge(&mut self, data: &[u8]) -> Scalar {
        self.absorb(data);
        self.challenge_scalar()
    }

    /// One recursion round: absorbs the six serialized commitment
    /// slots (left 0..3, then right 0..3) and returns the round
    /// challenge derived from the updated state.
    pub fn round_challenge(
        &mut self,
        com_l: &Commitment,
        com_r: &Commitment,
    ) -> GipaResult<Scalar> {
        let mut data = Vec::new();
        for slot in com_l.slots() {
            data.extend(compressed_bytes(slot)?);
        }
        for slot in com_r.slots() {
            data.extend(compressed_bytes(slot)?);
        }
        Ok(self.absorb_and_challenge(&data))
    }

    /// Current 32-byte digest
    pub fn state(&self) -> [u8; 32] {
        self.state
    }
}
