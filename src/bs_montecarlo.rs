// Monte-Carlo estimation driver
//
// Trials are statistically independent; the estimate is the arithmetic mean
// of the per-trial delivered fractions. A parallel variant fans the trials
// out across rayon workers, each trial with its own seeded RNG so no random
// state is shared.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::bs_interface::{ModelKind, SimParams};

/// Mean delivered fraction over `iterations` independent trials.
///
/// Panics if `iterations == 0`.
pub fn estimate<R: Rng + ?Sized>(
    model: ModelKind,
    params: &SimParams,
    iterations: usize,
    rng: &mut R,
) -> f64 {
    assert!(iterations >= 1, "estimate requires at least one iteration");

    let mut sum = 0.0;
    for _ in 0..iterations {
        sum += model.trial(params, rng);
    }
    sum / iterations as f64
}

/// Parallel variant of [`estimate`].
///
/// Per-trial seeds are drawn from the caller's RNG up front, then each trial
/// runs on its own `StdRng`. The partial sums reduce commutatively, so the
/// combination order cannot change the result distribution.
pub fn estimate_parallel<R: Rng + ?Sized>(
    model: ModelKind,
    params: &SimParams,
    iterations: usize,
    rng: &mut R,
) -> f64 {
    assert!(iterations >= 1, "estimate requires at least one iteration");

    let seeds: Vec<[u8; 32]> = (0..iterations)
        .map(|_| {
            let mut seed = [0u8; 32];
            rng.fill(&mut seed);
            seed
        })
        .collect();

    let sum: f64 = seeds
        .into_par_iter()
        .map(|seed| {
            let mut trial_rng = StdRng::from_seed(seed);
            model.trial(params, &mut trial_rng)
        })
        .sum();

    sum / iterations as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng_from(byte: u8) -> StdRng {
        StdRng::from_seed([byte; 32])
    }

    fn base_params() -> SimParams {
        SimParams {
            clusters: 10,
            nodes: 5,
            seeders: 3,
            blackouts: 3,
        }
    }

    #[test]
    fn test_estimate_is_a_fraction() {
        let mut rng = rng_from(1);
        let mean = estimate(ModelKind::P2p, &base_params(), 500, &mut rng);
        assert!((0.0..=1.0).contains(&mean));

        let mean = estimate(ModelKind::Server, &base_params(), 500, &mut rng);
        assert!((0.0..=1.0).contains(&mean));
    }

    #[test]
    fn test_estimate_of_deterministic_trial_is_exact() {
        // All clusters isolated: the server result is seeders/total_peers on
        // every draw, so the mean is exact whatever the iteration count.
        let params = SimParams {
            clusters: 10,
            nodes: 5,
            seeders: 3,
            blackouts: 10,
        };
        let mut rng = rng_from(2);

        assert_eq!(estimate(ModelKind::Server, &params, 1, &mut rng), 0.06);

        // Over many iterations the mean only moves by float rounding
        let mean = estimate(ModelKind::Server, &params, 250, &mut rng);
        assert!((mean - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_degenerate_params_is_zero() {
        let params = SimParams {
            clusters: 10,
            nodes: 5,
            seeders: 51,
            blackouts: 3,
        };
        let mut rng = rng_from(3);

        assert_eq!(estimate(ModelKind::P2p, &params, 100, &mut rng), 0.0);
        assert_eq!(estimate(ModelKind::Server, &params, 100, &mut rng), 0.0);
    }

    #[test]
    #[should_panic(expected = "at least one iteration")]
    fn test_estimate_rejects_zero_iterations() {
        let mut rng = rng_from(4);
        estimate(ModelKind::P2p, &base_params(), 0, &mut rng);
    }

    #[test]
    fn test_parallel_agrees_with_sequential() {
        // Different trial orderings, same distribution: with enough
        // iterations the two estimates land close together.
        let params = base_params();
        let mut rng_a = rng_from(5);
        let mut rng_b = rng_from(6);

        let sequential = estimate(ModelKind::P2p, &params, 20_000, &mut rng_a);
        let parallel = estimate_parallel(ModelKind::P2p, &params, 20_000, &mut rng_b);

        assert!(
            (sequential - parallel).abs() < 0.02,
            "sequential {} vs parallel {}",
            sequential,
            parallel
        );
    }

    #[test]
    fn test_more_seeders_does_not_hurt_p2p() {
        let mut rng = rng_from(7);
        let few = SimParams {
            seeders: 2,
            ..base_params()
        };
        let many = SimParams {
            seeders: 10,
            ..base_params()
        };

        let mean_few = estimate(ModelKind::P2p, &few, 4000, &mut rng);
        let mean_many = estimate(ModelKind::P2p, &many, 4000, &mut rng);

        assert!(mean_many >= mean_few - 0.02);
    }

    #[test]
    fn test_more_blackouts_does_not_help_either_model() {
        let mut rng = rng_from(8);
        let few = SimParams {
            blackouts: 1,
            ..base_params()
        };
        let many = SimParams {
            blackouts: 8,
            ..base_params()
        };

        for model in [ModelKind::P2p, ModelKind::Server] {
            let mean_few = estimate(model, &few, 4000, &mut rng);
            let mean_many = estimate(model, &many, 4000, &mut rng);
            assert!(
                mean_many <= mean_few + 0.02,
                "{}: {} blackouts gave {}, {} blackouts gave {}",
                model.name(),
                1,
                mean_few,
                8,
                mean_many
            );
        }
    }

    #[test]
    fn test_mean_spread_shrinks_with_iterations() {
        // Standard error goes as 1/sqrt(iterations): repeated estimates at
        // 400 iterations must scatter less than repeated estimates at 25.
        let params = base_params();

        let spread = |iterations: usize| {
            let means: Vec<f64> = (0..20u8)
                .map(|rep| {
                    let mut rng = StdRng::from_seed([rep.wrapping_add(100); 32]);
                    estimate(ModelKind::P2p, &params, iterations, &mut rng)
                })
                .collect();
            let avg = means.iter().sum::<f64>() / means.len() as f64;
            let var = means.iter().map(|m| (m - avg) * (m - avg)).sum::<f64>()
                / means.len() as f64;
            var.sqrt()
        };

        assert!(spread(400) < spread(25));
    }
}
