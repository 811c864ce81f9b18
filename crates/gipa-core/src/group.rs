//! Pairing inner products, vector folds, and canonical byte encodings

use crate::{GipaError, GipaResult, Scalar, Target, G1, G2};
use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;
use ark_ec::CurveGroup;
use ark_serialize::CanonicalSerialize;
use rayon::prelude::*;

/// Computes the pairing inner product `prod_i e(a[i], b[i])` via a
/// multi-Miller loop followed by a single final exponentiation.
pub fn pairing_inner_product(a: &[G1], b: &[G2]) -> GipaResult<Target> {
    if a.len() != b.len() {
        return Err(GipaError::SizeMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    if a.is_empty() {
        return Err(GipaError::EmptyVector);
    }

    let a_affine = G1::normalize_batch(a);
    let b_affine = G2::normalize_batch(b);
    Ok(Bls12_381::multi_pairing(a_affine, b_affine))
}

/// Single pairing `e(a, b)`
pub fn pairing(a: &G1, b: &G2) -> Target {
    Bls12_381::pairing(a.into_affine(), b.into_affine())
}

/// Element-wise fold `x * right[i] + left[i]` over G1.
/// Both halves must have the same length.
pub fn fold_g1(x: &Scalar, right: &[G1], left: &[G1]) -> GipaResult<Vec<G1>> {
    if right.len() != left.len() {
        return Err(GipaError::SizeMismatch {
            expected: right.len(),
            actual: left.len(),
        });
    }

    Ok(right
        .par_iter()
        .zip(left.par_iter())
        .map(|(r, l)| *r * *x + *l)
        .collect())
}

/// Element-wise fold `x * right[i] + left[i]` over G2.
pub fn fold_g2(x: &Scalar, right: &[G2], left: &[G2]) -> GipaResult<Vec<G2>> {
    if right.len() != left.len() {
        return Err(GipaError::SizeMismatch {
            expected: right.len(),
            actual: left.len(),
        });
    }

    Ok(right
        .par_iter()
        .zip(left.par_iter())
        .map(|(r, l)| *r * *x + *l)
        .collect())
}

/// Canonical compressed encoding of a group or field element.
///
/// These bytes are the only externally meaningful layout the argument
/// defines; they feed the Fiat-Shamir transcript on both sides.
pub fn compressed_bytes<T: CanonicalSerialize>(value: &T) -> GipaResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(value.compressed_size());
    value
        .serialize_compressed(&mut bytes)
        .map_err(|e| GipaError::Serialization(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{random_g1_vec, random_g2_vec};
    use ark_ff::Field;
    use ark_std::test_rng;
    use ark_std::UniformRand;

    #[test]
    fn test_inner_product_matches_single_pairings() {
        let mut rng = test_rng();
        let a = random_g1_vec(&mut rng, 4);
        let b = random_g2_vec(&mut rng, 4);

        let expected: Target = a.iter().zip(b.iter()).map(|(x, y)| pairing(x, y)).sum();

        assert_eq!(pairing_inner_product(&a, &b).unwrap(), expected);
    }

    #[test]
    fn test_inner_product_rejects_bad_shapes() {
        let mut rng = test_rng();
        let a = random_g1_vec(&mut rng, 4);
        let b = random_g2_vec(&mut rng, 2);

        assert!(pairing_inner_product(&a, &b).is_err());
        assert_eq!(
            pairing_inner_product(&[], &[]),
            Err(GipaError::EmptyVector)
        );
    }

    #[test]
    fn test_fold_is_elementwise() {
        let mut rng = test_rng();
        let x = Scalar::rand(&mut rng);
        let right = random_g1_vec(&mut rng, 3);
        let left = random_g1_vec(&mut rng, 3);

        let folded = fold_g1(&x, &right, &left).unwrap();
        for i in 0..3 {
            assert_eq!(folded[i], right[i] * x + left[i]);
        }

        assert!(fold_g1(&x, &right, &left[..2]).is_err());
    }

    #[test]
    fn test_fold_then_pair_matches_cross_terms() {
        // e(x*aR + aL, y*bR + bL) expands over the four cross pairings
        let mut rng = test_rng();
        let x = Scalar::rand(&mut rng);
        let y = x.inverse().unwrap();
        let a_l = random_g1_vec(&mut rng, 2);
        let a_r = random_g1_vec(&mut rng, 2);
        let b_l = random_g2_vec(&mut rng, 2);
        let b_r = random_g2_vec(&mut rng, 2);

        let a = fold_g1(&x, &a_r, &a_l).unwrap();
        let b = fold_g2(&y, &b_r, &b_l).unwrap();

        let lhs = pairing_inner_product(&a, &b).unwrap();
        let rhs = pairing_inner_product(&a_l, &b_l).unwrap()
            + pairing_inner_product(&a_r, &b_r).unwrap()
            + pairing_inner_product(&a_r, &b_l).unwrap() * x
            + pairing_inner_product(&a_l, &b_r).unwrap() * y;
        assert_eq!(lhs, rhs);
    }
}
