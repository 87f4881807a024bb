// Strategy Comparison: Gossip vs Central Server Under Blackouts
//
// This scenario sweeps the blackout count at two seeding levels and compares
// how gracefully each delivery strategy degrades.
//
// Simulation A: sparse seeding (3 seeders across 50 peers)
// Simulation B: heavy seeding (15 seeders across 50 peers)
//
// Both use the same topology: 10 clusters of 5 peers, 500 iterations/point

mod sweep;

use blackout_sim::SweepParam;
use sweep::{FixedParams, OutputConfig, SweepOutcome, SweepRunner, SweepScenarioConfig, SweepSpec};

fn run_simulation(seeders: usize, label: &str) -> SweepOutcome {
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  {}                                  ║", label);
    println!("╚════════════════════════════════════════════════════════╝\n");

    let config = SweepScenarioConfig {
        iterations: 500,
        fixed: FixedParams {
            clusters: 10,
            nodes: 5,
            seeders, // THE KEY DIFFERENCE
            blackouts: 0,
        },
        sweeps: vec![SweepSpec {
            param: SweepParam::Blackouts,
            from: 0,
            to: 10,
            title: Some(format!("Received vs Blackouts ({} seeders)", seeders)),
        }],
        output: OutputConfig::default(),
    };

    println!("Configuration: {} seeders, blackouts swept 0..=10\n", seeders);

    let runner = SweepRunner::new(config, Some([42u8; 32]));
    let mut outcomes = runner.run();
    let outcome = outcomes.remove(0);

    outcome.print_summary();
    outcome
}

fn main() {
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  STRATEGY COMPARISON: Gossip vs Central Server         ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    println!("Hypothesis:");
    println!("  The server dominates while most clusters stay reachable, but");
    println!("  heavy seeding should let gossip hold up better as blackouts");
    println!("  approach the full cluster count.\n");

    println!("Setup:");
    println!("  - 10 clusters x 5 peers, 500 iterations per sweep point");
    println!("  - Simulation A: 3 seeders (sparse)");
    println!("  - Simulation B: 15 seeders (heavy)");
    println!("  - Blackouts swept from 0 to 10 in both\n");

    // Run both simulations
    let sparse = run_simulation(3, "SIMULATION A: Sparse Seeding (3)");
    let heavy = run_simulation(15, "SIMULATION B: Heavy Seeding (15)");

    // Comparative analysis
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  COMPARATIVE ANALYSIS                                  ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    println!("┌──────────────┬─────────────────────┬─────────────────────┐");
    println!("│              │  3 seeders          │  15 seeders         │");
    println!("│  blackouts   │    p2p     server   │    p2p     server   │");
    println!("├──────────────┼─────────────────────┼─────────────────────┤");

    for (i, &(b, sparse_p2p)) in sparse.p2p.points.iter().enumerate() {
        let sparse_server = sparse.server.points[i].1;
        let heavy_p2p = heavy.p2p.points[i].1;
        let heavy_server = heavy.server.points[i].1;
        println!(
            "│  {:>10}  │  {:6.3}    {:6.3}   │  {:6.3}    {:6.3}   │",
            b, sparse_p2p, sparse_server, heavy_p2p, heavy_server
        );
    }

    println!("└──────────────┴─────────────────────┴─────────────────────┘\n");

    // Findings
    println!("Findings:\n");

    let full_blackout = sparse.p2p.points.len() - 1;
    let sparse_gap = sparse.p2p.points[full_blackout].1 - sparse.server.points[full_blackout].1;
    let heavy_gap = heavy.p2p.points[full_blackout].1 - heavy.server.points[full_blackout].1;

    if heavy.p2p.points[full_blackout].1 > sparse.p2p.points[full_blackout].1 + 0.05 {
        println!(
            "✓ Under total blackout, heavy seeding lifted gossip delivery from {:.3} to {:.3}",
            sparse.p2p.points[full_blackout].1, heavy.p2p.points[full_blackout].1
        );
    } else {
        println!("⚠ Seeding level barely moved gossip delivery under total blackout");
    }

    if sparse_gap.abs() < 0.01 && heavy_gap.abs() < 0.01 {
        println!("⚠ With every cluster isolated the strategies converge: only local seeds count");
    }

    let (x, gap) = sparse.max_server_advantage();
    if gap > 0.0 {
        println!(
            "✓ Sparse seeding: server led by up to {:.3} (at {} blackouts)",
            gap, x
        );
    }

    println!("\nConclusion:");
    println!("  Centralized delivery is insensitive to seed placement but");
    println!("  collapses with isolation; gossip delivery is bounded by where");
    println!("  the seeds landed. Seeding is the P2P resilience lever.");

    println!("\n✓ Scenario complete!\n");
}
