// Parameter sweep driver
//
// Holds all parameters but one fixed, varies the remaining one over an
// ascending inclusive integer range, and produces one mean-fraction series
// per model, ready for an external plotting consumer.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::Deserialize;

use crate::bs_interface::{ModelKind, Series, SimParams};
use crate::bs_montecarlo::estimate;

/// Which parameter a sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepParam {
    Seeders,
    Blackouts,
    Clusters,
}

impl SweepParam {
    /// Axis label used in summaries and CSV headers
    pub fn label(&self) -> &'static str {
        match self {
            SweepParam::Seeders => "seeders",
            SweepParam::Blackouts => "blackouts",
            SweepParam::Clusters => "clusters",
        }
    }

    fn apply(&self, base: &SimParams, value: usize) -> SimParams {
        let mut params = *base;
        match self {
            SweepParam::Seeders => params.seeders = value,
            SweepParam::Blackouts => params.blackouts = value,
            SweepParam::Clusters => params.clusters = value,
        }
        params
    }
}

/// Sweep one parameter over an inclusive range for a single model.
///
/// Points are appended in ascending swept-value order; that order is the
/// x-axis of the resulting series.
pub fn sweep<R: Rng + ?Sized>(
    model: ModelKind,
    base: &SimParams,
    param: SweepParam,
    range: RangeInclusive<usize>,
    iterations: usize,
    rng: &mut R,
) -> Series {
    let mut points = Vec::new();
    for value in range {
        let params = param.apply(base, value);
        points.push((value, estimate(model, &params, iterations, rng)));
    }

    Series {
        name: model.name().to_string(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn base_params() -> SimParams {
        SimParams {
            clusters: 10,
            nodes: 5,
            seeders: 3,
            blackouts: 3,
        }
    }

    #[test]
    fn test_sweep_covers_range_in_ascending_order() {
        let mut rng = StdRng::from_seed([9u8; 32]);
        let series = sweep(
            ModelKind::P2p,
            &base_params(),
            SweepParam::Seeders,
            1..=50,
            10,
            &mut rng,
        );

        assert_eq!(series.name, "p2p");
        assert_eq!(series.points.len(), 50);
        for (i, &(value, mean)) in series.points.iter().enumerate() {
            assert_eq!(value, i + 1);
            assert!((0.0..=1.0).contains(&mean));
        }
    }

    #[test]
    fn test_blackout_sweep_of_seedless_server_is_exact() {
        // With no seeds the server result is (clusters - b) / clusters on
        // every draw, so each sweep point is exact.
        let base = SimParams {
            clusters: 10,
            nodes: 5,
            seeders: 0,
            blackouts: 0,
        };
        let mut rng = StdRng::from_seed([10u8; 32]);
        let series = sweep(
            ModelKind::Server,
            &base,
            SweepParam::Blackouts,
            0..=10,
            5,
            &mut rng,
        );

        for &(b, mean) in &series.points {
            let expected = (10 - b) as f64 / 10.0;
            assert!(
                (mean - expected).abs() < 1e-12,
                "blackouts={}: {} vs {}",
                b,
                mean,
                expected
            );
        }
    }

    #[test]
    fn test_cluster_sweep_substitutes_cluster_count() {
        // A value past the fixed blackout count must stop being degenerate:
        // sweeping clusters 1..=2 with blackouts=3 yields zeros, 3..=5 not
        // necessarily.
        let base = SimParams {
            clusters: 50,
            nodes: 5,
            seeders: 15,
            blackouts: 3,
        };
        let mut rng = StdRng::from_seed([11u8; 32]);
        let series = sweep(
            ModelKind::Server,
            &base,
            SweepParam::Clusters,
            1..=5,
            50,
            &mut rng,
        );

        assert_eq!(series.points[0], (1, 0.0));
        assert_eq!(series.points[1], (2, 0.0));
        // clusters=4 and up can hold the 15 seeders; reachable clusters
        // always deliver, so the mean is strictly positive
        assert!(series.points[3].1 > 0.0);
        assert!(series.points[4].1 > 0.0);
    }

    #[test]
    fn test_sweep_param_yaml_names() {
        let param: SweepParam = serde_yaml::from_str("seeders").unwrap();
        assert_eq!(param, SweepParam::Seeders);
        let param: SweepParam = serde_yaml::from_str("blackouts").unwrap();
        assert_eq!(param, SweepParam::Blackouts);
        let param: SweepParam = serde_yaml::from_str("clusters").unwrap();
        assert_eq!(param, SweepParam::Clusters);
    }
}
