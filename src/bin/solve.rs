//! 8-puzzle search comparison CLI.
//!
//! Runs the single-agent search algorithms over one 8-puzzle instance
//! and outputs a JSON record per algorithm with its generated-state
//! count.
//!
//! Usage:
//!   cargo run --release --bin solve -- [OPTIONS]
//!
//! Options:
//!   --scramble N     Scramble the goal board with N random slides
//!                    instead of using the standard starting board
//!   --seed N         Random seed, 0 for entropy (default: 0)
//!   --depth-limit N  Bound for the depth-limited run (default: 10)
//!   --max-depth N    Iterative-deepening ceiling (default: 100)
//!   --output FILE    Output file path (default: stdout)

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use statespace::domain::EightPuzzleState;
use statespace::search::{best_first, bfs, dls, ids, SearchResult};

/// One output line: how an algorithm fared on the instance.
#[derive(Debug, Serialize)]
struct SolveRecord {
    algorithm: &'static str,
    solved: bool,
    generated: u64,
}

impl SolveRecord {
    fn new(algorithm: &'static str, result: &SearchResult<EightPuzzleState>) -> Self {
        SolveRecord {
            algorithm,
            solved: result.goal.is_some(),
            generated: result.generated,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut scramble: Option<u32> = None;
    let mut seed: u64 = 0;
    let mut depth_limit: u32 = 10;
    let mut max_depth: u32 = 100;
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scramble" => {
                i += 1;
                scramble = Some(args[i].parse().expect("invalid --scramble value"));
            }
            "--seed" => {
                i += 1;
                seed = args[i].parse().expect("invalid --seed value");
            }
            "--depth-limit" => {
                i += 1;
                depth_limit = args[i].parse().expect("invalid --depth-limit value");
            }
            "--max-depth" => {
                i += 1;
                max_depth = args[i].parse().expect("invalid --max-depth value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let initial = match scramble {
        Some(steps) => {
            let mut rng = if seed == 0 {
                SmallRng::from_entropy()
            } else {
                SmallRng::seed_from_u64(seed)
            };
            EightPuzzleState::scrambled(&mut rng, steps)
        }
        None => EightPuzzleState::default(),
    };

    let records = [
        SolveRecord::new("bfs", &bfs(initial)),
        SolveRecord::new("dls", &dls(initial, depth_limit)),
        SolveRecord::new("ids", &ids(initial, max_depth)),
        SolveRecord::new(
            "best_first",
            &best_first(initial, EightPuzzleState::displacement),
        ),
    ];

    let mut out: Box<dyn Write> = match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    eprint!("instance:\n{}", initial);
    for record in &records {
        let line = serde_json::to_string(record).expect("failed to serialize record");
        writeln!(out, "{}", line).expect("failed to write record");
    }
    out.flush().expect("failed to flush output");
}

fn print_usage() {
    eprintln!("Usage: solve [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scramble N     Scramble the goal board with N random slides");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --depth-limit N  Bound for the depth-limited run (default: 10)");
    eprintln!("  --max-depth N    Iterative-deepening ceiling (default: 100)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
}
