// Uniform sampling without replacement
//
// Both seed placement and blackout selection draw distinct indices from a
// finite population. The draw must be uniform over all C(n, k) subsets;
// independent per-item coin flips would change the count distribution and
// are not acceptable here.

use hashbrown::HashSet;
use rand::Rng;

/// Draw `k` distinct integers in `[0, n)`, uniform over all C(n, k) subsets.
///
/// Panics if `k > n` — selecting more items than the population holds is a
/// caller bug, and the degenerate configurations are checked by the models
/// before any sampling happens.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, n: usize, k: usize) -> HashSet<usize> {
    assert!(
        k <= n,
        "cannot draw {} distinct items from a population of {}",
        k,
        n
    );
    rand::seq::index::sample(rng, n, k).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_size_and_range() {
        let mut rng = StdRng::from_seed([1u8; 32]);

        for _ in 0..50 {
            let drawn = sample(&mut rng, 20, 7);
            assert_eq!(drawn.len(), 7);
            assert!(drawn.iter().all(|&i| i < 20));
        }
    }

    #[test]
    fn test_sample_full_population() {
        let mut rng = StdRng::from_seed([2u8; 32]);

        let drawn = sample(&mut rng, 12, 12);
        assert_eq!(drawn.len(), 12);
        for i in 0..12 {
            assert!(drawn.contains(&i));
        }
    }

    #[test]
    fn test_sample_empty_draw() {
        let mut rng = StdRng::from_seed([3u8; 32]);
        assert!(sample(&mut rng, 10, 0).is_empty());
        assert!(sample(&mut rng, 0, 0).is_empty());
    }

    #[test]
    #[should_panic(expected = "cannot draw")]
    fn test_sample_rejects_oversized_draw() {
        let mut rng = StdRng::from_seed([4u8; 32]);
        sample(&mut rng, 5, 6);
    }

    #[test]
    fn test_sample_covers_population_over_many_draws() {
        // Every index should show up eventually; a biased sampler that never
        // emits some index would fail this.
        let mut rng = StdRng::from_seed([5u8; 32]);
        let mut seen = [false; 10];

        for _ in 0..200 {
            for i in sample(&mut rng, 10, 3) {
                seen[i] = true;
            }
        }

        assert!(seen.iter().all(|&s| s));
    }
}
