// Centralized-server delivery model
//
// No wavefront and no backlog: the server fully serves every reachable
// cluster regardless of seeding, while isolated clusters keep only the
// content already seeded on their own nodes. Seed and blackout draws use
// the same distributions as the gossip model but are independent draws.

use rand::Rng;

use crate::bs_interface::SimParams;
use crate::bs_select::sample;
use crate::bs_topology::Topology;

/// Fraction of peers delivered in one server trial.
pub fn trial<R: Rng + ?Sized>(params: &SimParams, rng: &mut R) -> f64 {
    if params.is_degenerate() {
        return 0.0;
    }

    let topo = Topology::new(params.clusters, params.nodes);
    let peers = topo.total_peers();
    if peers == 0 {
        return 0.0;
    }

    // Per-cluster seeded-node counts; seeds are distinct so counting per
    // cluster is equivalent to the full delivery grid
    let mut seeded = vec![0usize; params.clusters];
    for peer in sample(rng, peers, params.seeders) {
        let (cluster, _node) = topo.locate(peer);
        seeded[cluster] += 1;
    }

    let cut = sample(rng, params.clusters, params.blackouts);

    let mut success = 0usize;
    for cluster in 0..params.clusters {
        if cut.contains(&cluster) {
            success += seeded[cluster];
        } else {
            success += params.nodes;
        }
    }

    success as f64 / peers as f64
}
