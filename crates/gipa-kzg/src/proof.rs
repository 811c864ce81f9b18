//! Proof object for the compressed argument

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use gipa_core::{Commitment, G1, G2};

/// A compressed inner pairing product proof.
///
/// The round commitments and final elements are exactly those of the
/// plain argument; on top, the prover discloses the two fully folded
/// key elements (`w`, `v`) and proves each is the Halo-polynomial
/// evaluation at the reference-string secret via a single-point
/// opening (`pi_w`, `pi_v`).
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
    /// Folded `w` key element, also the commitment to the Halo polynomial
    pub w: G1,
    /// Folded `v` key element, commitment to the inverted Halo polynomial
    pub v: G2,
    /// Opening proof of the Halo polynomial at the first derived point
    pub pi_w: G1,
    /// Opening proof of the inverted Halo polynomial at the second derived point
    pub pi_v: G2,
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
