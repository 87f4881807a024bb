//! # blackout_sim - Content Delivery Resilience Simulator
//!
//! Monte-Carlo comparison of two content delivery strategies over a clustered
//! peer network under partial blackout: decentralized gossip propagation
//! ("P2P") versus centralized-server delivery. Content starts at a random
//! subset of peers and a random subset of clusters is cut off; the estimate
//! is the mean fraction of peers that obtain the content.
//!
//! ## Core Components
//!
//! - **Topology**: `clusters` groups of `nodes` peers with flat peer indexing
//! - **P2P model**: gossip wavefront over reachable clusters with backlog credit
//! - **Server model**: a central server fully serves every reachable cluster
//! - **Monte-Carlo driver**: mean delivered fraction over independent trials
//! - **Sweep driver**: one-parameter sweeps producing plottable series
//!
//! ## Usage
//!
//! ```no_run
//! use blackout_sim::{estimate, ModelKind, SimParams};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let params = SimParams { clusters: 10, nodes: 5, seeders: 3, blackouts: 3 };
//! let mut rng = StdRng::from_seed([7u8; 32]);
//!
//! let p2p = estimate(ModelKind::P2p, &params, 100, &mut rng);
//! let server = estimate(ModelKind::Server, &params, 100, &mut rng);
//! println!("p2p={:.3} server={:.3}", p2p, server);
//! ```
//!
//! ## Comparative Model, Not an Emulator
//!
//! The engine produces plain numeric series; rendering is an external
//! consumer's job. For scenario files and CSV export see the sweep runner
//! under `simulator/`.

// Core simulation modules
pub mod bs_interface;
pub mod bs_montecarlo;
pub mod bs_p2p;
pub mod bs_select;
pub mod bs_server;
pub mod bs_sweep;
pub mod bs_topology;

// Re-export commonly used types
pub use bs_interface::{ClusterIndex, ModelKind, PeerIndex, Series, SimParams};
pub use bs_montecarlo::{estimate, estimate_parallel};
pub use bs_sweep::{sweep, SweepParam};
pub use bs_topology::Topology;
