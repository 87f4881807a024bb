use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simple_logger::SimpleLogger;

use crate::bs_interface::{ModelKind, Series, SimParams};
use crate::bs_sweep::{sweep, SweepParam};

mod bs_interface;
mod bs_montecarlo;
mod bs_p2p;
mod bs_select;
mod bs_server;
mod bs_sweep;
mod bs_topology;

fn main() {
    SimpleLogger::new().init().unwrap();

    info!("starting");

    let iterations = 100;
    let mut seed = [0u8; 32];
    rand::thread_rng().fill(&mut seed);
    let mut rng = StdRng::from_seed(seed);

    // Experiment 1: received fraction vs seeder count
    let base = SimParams {
        clusters: 10,
        nodes: 5,
        seeders: 0,
        blackouts: 3,
    };
    let range = 1..=base.total_peers();
    let p2p = sweep(ModelKind::P2p, &base, SweepParam::Seeders, range.clone(), iterations, &mut rng);
    let server = sweep(ModelKind::Server, &base, SweepParam::Seeders, range, iterations, &mut rng);
    print_sweep("Received vs Seeders", "seeders", &p2p, &server);

    // Experiment 2: received fraction vs blackout count
    let base = SimParams {
        clusters: 10,
        nodes: 5,
        seeders: 3,
        blackouts: 0,
    };
    let range = 1..=base.clusters;
    let p2p = sweep(ModelKind::P2p, &base, SweepParam::Blackouts, range.clone(), iterations, &mut rng);
    let server = sweep(ModelKind::Server, &base, SweepParam::Blackouts, range, iterations, &mut rng);
    print_sweep("Received vs Blackouts", "blackouts", &p2p, &server);

    // Experiment 3: received fraction vs cluster count
    let base = SimParams {
        clusters: 50,
        nodes: 5,
        seeders: 3,
        blackouts: 3,
    };
    let range = 1..=base.clusters;
    let p2p = sweep(ModelKind::P2p, &base, SweepParam::Clusters, range.clone(), iterations, &mut rng);
    let server = sweep(ModelKind::Server, &base, SweepParam::Clusters, range, iterations, &mut rng);
    print_sweep("Received vs Clusters", "clusters", &p2p, &server);

    info!("done");
}

fn print_sweep(title: &str, axis: &str, p2p: &Series, server: &Series) {
    info!("=== {} ===", title);
    info!("{:>10} {:>8} {:>8}", axis, p2p.name, server.name);
    for (&(x, p2p_mean), &(_, server_mean)) in p2p.points.iter().zip(server.points.iter()) {
        info!("{:>10} {:>8.3} {:>8.3}", x, p2p_mean, server_mean);
    }
}
