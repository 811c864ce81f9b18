//! Proof object produced by the recursion

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use gipa_core::{Commitment, G1, G2};

/// A transcript-ordered inner pairing product proof.
///
/// One (left, right) commitment pair per halving round, round 0 first,
/// plus the single remaining elements of the folded vectors. Immutable
/// once produced; together with the verifier's own key and commitment
/// it fully determines the verification outcome.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof {
    /// Left commitments, one per round
    pub l: Vec<Commitment>,
    /// Right commitments, one per round
    pub r: Vec<Commitment>,
    /// Final folded element of A
    pub a: G1,
    /// Final folded element of B
    pub b: G2,
}

impl Proof {
    /// Number of halving rounds the proof covers
    pub fn num_rounds(&self) -> usize {
        self.l.len()
    }

    /// The round-`i` commitment pair
    pub fn at(&self, i: usize) -> (&Commitment, &Commitment) {
        (&self.l[i], &self.r[i])
    }

    /// Compressed wire size in bytes
    pub fn size_bytes(&self) -> usize {
        self.compressed_size()
    }
}
