// Clustered network topology
//
// A network is `clusters` groups of `nodes` peers each. Peers are addressed
// by a flat index that decomposes bijectively into (cluster, node).

use crate::bs_interface::{ClusterIndex, PeerIndex};

/// An ordered list of equally-sized clusters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    pub clusters: usize,
    pub nodes: usize,
}

impl Topology {
    pub fn new(clusters: usize, nodes: usize) -> Self {
        Self { clusters, nodes }
    }

    /// Total peer count across all clusters
    pub fn total_peers(&self) -> usize {
        self.clusters * self.nodes
    }

    /// Decompose a flat peer index into (cluster, node).
    ///
    /// Total and unique for every index in `[0, total_peers())`.
    pub fn locate(&self, peer: PeerIndex) -> (ClusterIndex, usize) {
        debug_assert!(
            peer < self.total_peers(),
            "peer index {} out of range for {} peers",
            peer,
            self.total_peers()
        );
        (peer / self.nodes, peer % self.nodes)
    }
}
