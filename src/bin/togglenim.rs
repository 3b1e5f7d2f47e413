use std::path::PathBuf;

use clap::{Parser, Subcommand};
use togglenim::solver::sweep::{sweep_petersen, SweepOptions};
use togglenim::{solve_labelled, GraphFamily, StartConfig};

#[derive(Debug, Parser)]
#[command(name = "togglenim", about = "Nimbers of the strictly-decreasing toggle game on graphs")]
struct Args {
    /// Print the result as JSON instead of a label line
    #[arg(long, global = true)]
    json: bool,

    /// Suppress [togglenim] diagnostics on stderr
    #[arg(long, global = true)]
    quiet: bool,

    /// Do not fold rotations of Petersen states (slower, same result)
    #[arg(long, global = true)]
    no_symmetry: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generalized Petersen graph GP(m, k)
    Petersen {
        /// Cycle length
        m: usize,
        /// Inner step
        k: usize,
        /// Start: i (inner on), o (outer on), a (all on) or a bitstring of length 2m
        start: Option<String>,
    },
    /// h x w grid
    Grid {
        h: usize,
        w: usize,
        /// Start: i, o, a or a bitstring of length h*w
        start: Option<String>,
    },
    /// Two-row twisted ladder L(w, k)
    Ladder {
        w: usize,
        k: usize,
        /// Start: i, o, a, ti (inner twist), to (outer twist) or a bitstring of length 2w
        start: Option<String>,
    },
    /// Adjacency matrix file: vertex count line, then n rows of 0/1
    File {
        path: PathBuf,
        /// Start: i, o, a or a bitstring of length n
        start: Option<String>,
    },
    /// Solve GP(m, k) for every valid k
    Sweep {
        m: usize,
        /// Start configuration for every twist
        #[arg(long, default_value = "a")]
        start: String,
        /// Worker threads (defaults to all cores)
        #[arg(long)]
        threads: Option<usize>,
    },
}

fn family_and_start(cmd: &Command) -> Option<(GraphFamily, StartConfig)> {
    let start = |s: &Option<String>| s.as_deref().map(StartConfig::from_token).unwrap_or_default();
    match cmd {
        Command::Petersen { m, k, start: s } => Some((GraphFamily::Petersen { m: *m, k: *k }, start(s))),
        Command::Grid { h, w, start: s } => Some((GraphFamily::Grid { h: *h, w: *w }, start(s))),
        Command::Ladder { w, k, start: s } => Some((
            GraphFamily::TwistedLadder { w: *w, k: *k },
            s.as_deref().map(|t| StartConfig::from_ladder_token(t, *k)).unwrap_or_default(),
        )),
        Command::File { path, start: s } => Some((GraphFamily::File { path: path.clone() }, start(s))),
        Command::Sweep { .. } => None,
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("[togglenim] error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let log = |msg: String| {
        if !args.quiet {
            eprintln!("[togglenim] {msg}");
        }
    };

    if let Command::Sweep { m, start, threads } = &args.command {
        let opts = SweepOptions {
            start: StartConfig::from_token(start),
            symmetry: !args.no_symmetry,
            threads: *threads,
            progress: !args.quiet,
        };
        log(format!("sweeping GP({m}, k) over {} twists", togglenim::solver::sweep::petersen_twists(*m).len()));
        let entries = sweep_petersen(*m, &opts).map_err(|e| format!("sweep failed: {e}"))?;
        if args.json {
            println!("{}", serde_json::to_string(&entries)?);
        } else {
            for e in &entries {
                println!("{}", e.report);
            }
        }
        let total_ms: u128 = entries.iter().map(|e| e.report.elapsed_ms).sum();
        log(format!("sweep done, {} solves, {total_ms} ms of solver time", entries.len()));
        return Ok(());
    }

    let Some((family, start)) = family_and_start(&args.command) else {
        return Ok(());
    };

    let mut graph = family.build().map_err(|e| format!("graph build failed: {e}"))?;
    if args.no_symmetry {
        graph = graph.without_symmetry();
    }
    log(format!(
        "built {family}: {} vertices, {} edges, rotation folding {}",
        graph.len(),
        graph.edge_count(),
        if graph.symmetry().is_some() { "on" } else { "off" }
    ));

    let report = solve_labelled(graph, family.to_string(), &start).map_err(|e| format!("solve failed: {e}"))?;
    log(format!(
        "start {} ({} on), {} states memoised, {} expansions, {} rotation hits, {} ms",
        report.start,
        report.start.count_on(),
        report.memo_entries,
        report.stats.expansions,
        report.stats.symmetry_hits,
        report.elapsed_ms
    ));

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
