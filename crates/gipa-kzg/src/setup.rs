//! Consistent key generation for the compressed argument
//!
//! The commitment key and the two KZG reference strings must share
//! their secrets: the key holds the even powers `g * alpha^(2i)`,
//! `h * beta^(2i)` of the same walks whose full 2m - 1 powers form the
//! reference strings. One sharded power walk produces both.

use crate::{GipaKzgError, GipaKzgResult};
use gipa_core::keys::{fill_powers, CommitmentKey};
use gipa_core::utils::is_power_of_two;
use gipa_core::{Scalar, G1, G2};
use kzg::{KzgG1Settings, KzgG2Settings};

/// Builds a commitment key of size `m` together with the matching KZG
/// proving/verifying settings over reference strings of size 2m - 1.
pub fn setup(
    m: u64,
    alpha: &Scalar,
    beta: &Scalar,
    g: &G1,
    h: &G2,
) -> GipaKzgResult<(CommitmentKey, KzgG1Settings, KzgG2Settings)> {
    if !is_power_of_two(m) {
        return Err(GipaKzgError::NotPowerOfTwo(m));
    }

    let bound = 2 * m - 1;
    let (powers_g1, powers_g2) = fill_powers(bound, *alpha, *beta, g, h);

    let w: Vec<G1> = (0..m as usize).map(|i| powers_g1[2 * i]).collect();
    let v: Vec<G2> = (0..m as usize).map(|i| powers_g2[2 * i]).collect();

    let kzg1 = KzgG1Settings::new(powers_g1, [*h, *h * *alpha]);
    let kzg2 = KzgG2Settings::new(powers_g2, [*g, *g * *beta]);

    Ok((CommitmentKey { m, v, w }, kzg1, kzg2))
}
