// Shared types for the blackout resilience simulator
//
// The engine works on plain integer indices: a flat PeerIndex decomposes
// into (cluster, node) through the Topology, and both propagation models
// report a delivered fraction in [0, 1]. No component holds state across
// calls; everything a trial needs travels in SimParams plus an RNG.

use rand::Rng;

/// Flat peer index in `[0, clusters * nodes)`
pub type PeerIndex = usize;

/// Cluster index in `[0, clusters)`
pub type ClusterIndex = usize;

// ============================================================================
// Trial Parameters
// ============================================================================

/// Parameters for a single propagation trial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimParams {
    /// Number of equally-sized clusters
    pub clusters: usize,

    /// Peers per cluster
    pub nodes: usize,

    /// Peers holding content before the trial starts
    pub seeders: usize,

    /// Clusters severed from the rest of the network (and the server)
    pub blackouts: usize,
}

impl SimParams {
    /// Total peer count across all clusters
    pub fn total_peers(&self) -> usize {
        self.clusters * self.nodes
    }

    /// Configuration invalid for a trial: more seeders than peers or more
    /// blackouts than clusters. Models return 0.0 for these instead of
    /// attempting a selection larger than its population.
    pub fn is_degenerate(&self) -> bool {
        self.seeders > self.total_peers() || self.blackouts > self.clusters
    }
}

// ============================================================================
// Delivery Models
// ============================================================================

/// Which delivery strategy a trial simulates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Gossip wavefront across reachable clusters
    P2p,

    /// Central server serving every non-isolated cluster
    Server,
}

impl ModelKind {
    /// Short label used in series names and CSV headers
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::P2p => "p2p",
            ModelKind::Server => "server",
        }
    }

    /// Run one trial of this model with fresh randomness from `rng`.
    ///
    /// Returns the delivered fraction in [0, 1]. Seed and blackout draws are
    /// independent per invocation; nothing is reused across calls.
    pub fn trial<R: Rng + ?Sized>(&self, params: &SimParams, rng: &mut R) -> f64 {
        match self {
            ModelKind::P2p => crate::bs_p2p::trial(params, rng),
            ModelKind::Server => crate::bs_server::trial(params, rng),
        }
    }
}

// ============================================================================
// Plotting Boundary
// ============================================================================

/// A named series of (x, y) points for an external plotting consumer.
///
/// Point order is ascending swept-parameter order; it is the x-axis and is
/// semantically meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(usize, f64)>,
}
