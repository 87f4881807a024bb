// Sweep Simulator Statistics and Export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use blackout_sim::{Series, SweepParam};

// ============================================================================
// Sweep Outcome
// ============================================================================

/// Result of one parameter sweep: the two model series over the same range
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    /// Chart title for the plotting consumer
    pub title: String,

    /// Swept parameter (the x-axis)
    pub param: SweepParam,

    /// Monte-Carlo iterations behind every point
    pub iterations: usize,

    /// Mean delivered fraction per swept value, gossip model
    pub p2p: Series,

    /// Mean delivered fraction per swept value, server model
    pub server: Series,
}

impl SweepOutcome {
    /// Largest P2P-minus-server gap across the sweep, with its x value
    pub fn max_p2p_advantage(&self) -> (usize, f64) {
        self.gap_extreme(|gap, best| gap > best)
    }

    /// Largest server-minus-P2P gap across the sweep, with its x value
    pub fn max_server_advantage(&self) -> (usize, f64) {
        let (x, gap) = self.gap_extreme(|gap, best| gap < best);
        (x, -gap)
    }

    fn gap_extreme(&self, better: impl Fn(f64, f64) -> bool) -> (usize, f64) {
        let mut best = (0, 0.0);
        for (&(x, p2p), &(_, server)) in self.p2p.points.iter().zip(&self.server.points) {
            let gap = p2p - server;
            if better(gap, best.1) {
                best = (x, gap);
            }
        }
        best
    }

    /// Print the sweep as a console table
    pub fn print_summary(&self) {
        println!("\n═══ {} ═══", self.title);
        println!("  ({} iterations per point)\n", self.iterations);

        println!("  {:>10} {:>8} {:>8}", self.param.label(), "p2p", "server");
        for (&(x, p2p), &(_, server)) in self.p2p.points.iter().zip(&self.server.points) {
            println!("  {:>10} {:>8.3} {:>8.3}", x, p2p, server);
        }

        let (p2p_x, p2p_gap) = self.max_p2p_advantage();
        let (server_x, server_gap) = self.max_server_advantage();
        println!();
        if p2p_gap > 0.0 {
            println!(
                "  Max P2P advantage:    {:+.3} at {} = {}",
                p2p_gap,
                self.param.label(),
                p2p_x
            );
        }
        if server_gap > 0.0 {
            println!(
                "  Max server advantage: {:+.3} at {} = {}",
                server_gap,
                self.param.label(),
                server_x
            );
        }
    }

    /// Export the sweep as CSV for external analysis and plotting.
    ///
    /// Format: one header row, then `value,p2p,server` per swept value.
    pub fn write_csv(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{},{},{}", self.param.label(), self.p2p.name, self.server.name)?;
        for (&(x, p2p), &(_, server)) in self.p2p.points.iter().zip(&self.server.points) {
            writeln!(writer, "{},{},{}", x, p2p, server)?;
        }

        writer.flush()
    }
}
