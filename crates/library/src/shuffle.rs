//! Shuffle Generator - randomized pairwise-swap permutations.
//!
//! Starting from the identity, `n` random transpositions are applied. When
//! the two drawn positions coincide the second one is redrawn once; a second
//! collision is accepted and that pass becomes a no-op swap. The result is
//! always a permutation of `0..n`, but not a uniformly distributed one.

use alloc::vec::Vec;

use rand::Rng;

/// Produce a permutation of `0..n` with `n` random transpositions.
///
/// `n == 0` yields an empty order and `n == 1` the identity.
pub fn shuffle<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    if n < 2 {
        return order;
    }
    for _ in 0..n {
        let a = rng.gen_range(0..n);
        let mut b = rng.gen_range(0..n);
        if a == b {
            b = rng.gen_range(0..n);
        }
        order.swap(a, b);
    }
    order
}

/// `true` when `order` contains each of `0..order.len()` exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = alloc::vec![false; order.len()];
    order.iter().all(|&i| match seen.get_mut(i) {
        Some(slot) if !*slot => {
            *slot = true;
            true
        }
        _ => false,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_and_single() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(shuffle(0, &mut rng).is_empty());
        assert_eq!(shuffle(1, &mut rng), vec![0]);
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = shuffle(32, &mut SmallRng::seed_from_u64(7));
        let b = shuffle(32, &mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_output_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(99);
        for n in 2..50 {
            assert!(is_permutation(&shuffle(n, &mut rng)), "n = {n}");
        }
    }

    #[test]
    fn test_is_permutation_rejects_duplicates() {
        assert!(!is_permutation(&[0, 0, 2]));
        assert!(!is_permutation(&[0, 3]));
        assert!(is_permutation(&[1, 0]));
    }
}
