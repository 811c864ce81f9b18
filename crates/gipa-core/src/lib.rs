//! # Core primitives for inner pairing product arguments
//!
//! This crate provides the building blocks shared by the plain and the
//! KZG-compressed inner pairing product argument:
//!
//! - [`CommitmentKey`]: the two-sided structured key (G2 powers `v`,
//!   G1 powers `w`) with its split and fold operations
//! - [`Commitment`]: the three-slot pairing commitment to a pair of
//!   group-element vectors and their claimed inner product
//! - [`Transcript`]: the hash-chained Fiat-Shamir transcript both
//!   parties mirror to derive identical round challenges
//! - [`group`]: multi-pairing inner products and vector folds

pub mod commitment;
pub mod errors;
pub mod group;
pub mod keys;
pub mod transcript;
pub mod utils;

pub use commitment::Commitment;
pub use errors::{GipaError, GipaResult};
pub use keys::CommitmentKey;
pub use transcript::Transcript;

use ark_ec::pairing::PairingOutput;

/// BLS12-381 scalar field element
pub type Scalar = ark_bls12_381::Fr;

/// First pairing group, holds the committed vector A and the key side `w`
pub type G1 = ark_bls12_381::G1Projective;

/// Second pairing group, holds the committed vector B and the key side `v`
pub type G2 = ark_bls12_381::G2Projective;

/// Target group of the pairing; commitments and inner products live here
pub type Target = PairingOutput<ark_bls12_381::Bls12_381>;
