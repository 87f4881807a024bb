// P2P gossip propagation model
//
// One trial: seed content at `seeders` random peers, isolate `blackouts`
// random clusters, then walk clusters in ascending index order. The gossip
// wavefront triggers at the first reachable cluster holding a seed and from
// then on saturates every reachable cluster, retroactively crediting the
// reachable clusters it had to pass through while waiting for a trigger.
// Isolated clusters are causally disconnected from the wavefront in both
// directions: they deliver locally iff they already hold a seed, and they
// never consume or extend the backlog.
//
// The ascending scan order is a fixed modeling choice, not randomized; it
// determines which clusters benefit from backlog credit.

use rand::Rng;

use crate::bs_interface::SimParams;
use crate::bs_select::sample;
use crate::bs_topology::Topology;

/// Fraction of peers delivered in one gossip trial.
pub fn trial<R: Rng + ?Sized>(params: &SimParams, rng: &mut R) -> f64 {
    if params.is_degenerate() {
        return 0.0;
    }

    let topo = Topology::new(params.clusters, params.nodes);
    let peers = topo.total_peers();
    if peers == 0 {
        return 0.0;
    }

    // Seed placement as a clusters x nodes delivery grid
    let mut grid = vec![vec![false; params.nodes]; params.clusters];
    for peer in sample(rng, peers, params.seeders) {
        let (cluster, node) = topo.locate(peer);
        grid[cluster][node] = true;
    }

    let cut = sample(rng, params.clusters, params.blackouts);

    let mut success = 0usize;
    let mut pending_backlog = 0usize;
    let mut wavefront_arrived = false;

    for cluster in 0..params.clusters {
        let seeded = grid[cluster].iter().any(|&s| s);

        if cut.contains(&cluster) {
            // Isolated: self-serves from a local seed, nothing else
            if seeded {
                success += params.nodes;
            }
        } else if wavefront_arrived {
            success += params.nodes;
        } else if seeded {
            // Wavefront triggers here; the reachable clusters it passed
            // over are credited retroactively
            wavefront_arrived = true;
            success += params.nodes + pending_backlog;
            pending_backlog = 0;
        } else {
            pending_backlog += params.nodes;
        }
    }

    success as f64 / peers as f64
}
