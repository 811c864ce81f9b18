//! Utility functions shared across the argument crates

use crate::{G1, G2};
use ark_std::rand::Rng;
use ark_std::UniformRand;

/// Check if a number is a power of 2
pub fn is_power_of_two(n: u64) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

/// Number of halving rounds for an instance of size `m`.
///
/// For powers of two this is `log2(m)`; `m = 1` takes zero rounds.
pub fn num_rounds(m: u64) -> usize {
    (64 - m.saturating_sub(1).leading_zeros()) as usize
}

/// Sample a random G1 vector, used to build test instances
pub fn random_g1_vec<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<G1> {
    (0..len).map(|_| G1::rand(rng)).collect()
}

/// Sample a random G2 vector, used to build test instances
pub fn random_g2_vec<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<G2> {
    (0..len).map(|_| G2::rand(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_power_of_two() {
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(2));
        assert!(is_power_of_two(1024));
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(3));
        assert!(!is_power_of_two(1023));
    }

    #[test]
    fn test_num_rounds() {
        assert_eq!(num_rounds(1), 0);
        assert_eq!(num_rounds(2), 1);
        assert_eq!(num_rounds(4), 2);
        assert_eq!(num_rounds(1024), 10);
    }
}
