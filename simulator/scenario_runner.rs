// Scenario Runner - Load and execute sweep scenario YAML files
//
// Usage:
//   cargo run --bin scenario_runner scenarios/seeders.yaml
//   cargo run --bin scenario_runner scenarios/  (runs all .yaml files in directory)
//   cargo run --bin scenario_runner scenarios/seeders.yaml --seed 0x1234...

mod sweep;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sweep::{SweepRunner, SweepScenarioConfig};

/// Sweep scenario file format
#[derive(Debug, serde::Deserialize)]
struct ScenarioFile {
    /// Scenario metadata
    #[serde(default)]
    meta: ScenarioMeta,

    /// Simulation configuration
    config: SweepScenarioConfig,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ScenarioMeta {
    name: Option<String>,
    description: Option<String>,
    hypothesis: Option<String>,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <scenario.yaml | directory/> [--seed SEED_HEX]", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} scenarios/seeders.yaml", args[0]);
        eprintln!("  {} scenarios/", args[0]);
        eprintln!("  {} scenarios/seeders.yaml --seed 0x123456...", args[0]);
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);

    // Parse optional seed
    let seed: Option<[u8; 32]> = if args.len() >= 4 && args[2] == "--seed" {
        Some(parse_seed_hex(&args[3]))
    } else {
        None
    };

    if path.is_file() {
        run_scenario_file(path, seed);
    } else if path.is_dir() {
        run_scenario_directory(path, seed);
    } else {
        eprintln!("Error: Path does not exist: {}", path.display());
        std::process::exit(1);
    }
}

fn run_scenario_directory(dir: &Path, seed: Option<[u8; 32]>) {
    let mut scenarios: Vec<PathBuf> = Vec::new();

    // Find all .yaml files
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("yaml")
                || path.extension().and_then(|s| s.to_str()) == Some("yml")
            {
                scenarios.push(path);
            }
        }
    }

    scenarios.sort();

    if scenarios.is_empty() {
        eprintln!("No .yaml files found in {}", dir.display());
        std::process::exit(1);
    }

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  SCENARIO RUNNER - Multiple Scenarios                  ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
    println!("Found {} scenario(s) to run\n", scenarios.len());

    for (i, scenario_path) in scenarios.iter().enumerate() {
        println!("\n{}/{} Running: {}\n", i + 1, scenarios.len(), scenario_path.display());
        run_scenario_file(scenario_path, seed);
    }

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  All scenarios complete!                               ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
}

fn run_scenario_file(path: &Path, seed: Option<[u8; 32]>) {
    println!("Loading scenario from: {}", path.display());

    // Load and parse YAML
    let yaml_content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path.display(), e);
        std::process::exit(1);
    });

    let scenario: ScenarioFile = serde_yaml::from_str(&yaml_content).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {}", path.display(), e);
        std::process::exit(1);
    });

    // Print scenario header
    println!("\n╔════════════════════════════════════════════════════════╗");
    if let Some(ref name) = scenario.meta.name {
        println!("║  {}  {}", name, " ".repeat(54_usize.saturating_sub(name.len())));
    } else {
        println!("║  Scenario: {}  ", path.file_stem().unwrap().to_str().unwrap());
    }
    println!("╚════════════════════════════════════════════════════════╝\n");

    if let Some(ref desc) = scenario.meta.description {
        println!("{}\n", desc);
    }

    if let Some(ref hypothesis) = scenario.meta.hypothesis {
        println!("Hypothesis:");
        println!("  {}\n", hypothesis);
    }

    let config = scenario.config;

    println!("Configuration:");
    println!("  Iterations: {}", config.iterations);
    println!(
        "  Fixed: clusters={} nodes={} seeders={} blackouts={}",
        config.fixed.clusters, config.fixed.nodes, config.fixed.seeders, config.fixed.blackouts
    );
    println!("  Sweeps: {}", config.sweeps.len());
    println!("\nStarting simulation...\n");

    let csv_dir = config.output.csv_dir.clone();
    let runner = SweepRunner::new(config, seed);
    let seed_used = runner.seed_used();
    let outcomes = runner.run();

    println!("Seed used: 0x{}", hex_string(&seed_used));

    // Print results and export CSVs
    for outcome in &outcomes {
        outcome.print_summary();

        if let Some(ref dir) = csv_dir {
            let dir = Path::new(dir);
            if let Err(e) = fs::create_dir_all(dir) {
                eprintln!("Failed to create {}: {}", dir.display(), e);
                std::process::exit(1);
            }
            let csv_path = dir.join(format!("{}_sweep.csv", outcome.param.label()));
            match outcome.write_csv(&csv_path) {
                Ok(()) => println!("\n  CSV written to {}", csv_path.display()),
                Err(e) => {
                    eprintln!("Failed to write {}: {}", csv_path.display(), e);
                    std::process::exit(1);
                }
            }
        }
    }

    println!("\n✓ Scenario complete!\n");
}

fn parse_seed_hex(hex: &str) -> [u8; 32] {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    let mut seed = [0u8; 32];

    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        if i >= 32 {
            break;
        }
        let byte_str = std::str::from_utf8(chunk).unwrap();
        seed[i] = u8::from_str_radix(byte_str, 16).unwrap_or_else(|e| {
            eprintln!("Invalid hex seed: {}", e);
            std::process::exit(1);
        });
    }

    seed
}

fn hex_string(seed: &[u8; 32]) -> String {
    seed.iter().map(|b| format!("{:02x}", b)).collect()
}
