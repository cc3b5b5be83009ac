//! CLI entry point for the ARC plan search.
//!
//! Usage:
//!   arc-search solve <task.json> [--max-depth <n>]
//!   arc-search replay <grid.json> --actions "rot90,mapcolor(1,2)"
//!   arc-search randomize <grid.json> --steps <n> [--seed <n>]
//!
//! Every subcommand accepts `--stdin` in place of a file path. Set
//! `RUST_LOG=debug` to see search progress on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde::de::DeserializeOwned;

use arc_search::{
    parse_plan, randomize, replay, solve_task, Action, ColorSpace, Grid, SearchConfig, State, Task,
    TaskInput, DEFAULT_MAX_DEPTH,
};

#[derive(Parser)]
#[command(name = "arc-search")]
#[command(about = "Bounded breadth-first synthesis of grid-transform programs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a plan solving a task (or a single input/output pair)
    Solve {
        /// Path to task JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read task from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Maximum number of actions in a plan
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Apply a comma-separated list of actions to a grid
    Replay {
        /// Path to grid JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read grid from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Actions such as "rot90,mapcolor(1,2)"
        #[arg(long)]
        actions: String,
    },

    /// Generate an exercise pair by applying random legal actions
    Randomize {
        /// Path to grid JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read grid from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Number of random actions to apply
        #[arg(long, default_value = "3")]
        steps: usize,

        /// Seed for the random generator
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

/// Output format for a generated exercise
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseOutput {
    input: Grid,
    output: Grid,
    actions: Vec<Action>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            max_depth,
        } => {
            let task: Task = read_json::<TaskInput>(file, stdin).into();
            let config = SearchConfig::with_max_depth(max_depth);

            let Some(result) = solve_task(&task, &config) else {
                fail("task has no training pairs");
            };
            info!(
                "searched {} states in {} ms",
                result.search.states_discovered, result.search.time_elapsed_ms
            );

            print_json(&result);

            if result.search.solved && result.consistent {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
        Commands::Replay {
            file,
            stdin,
            actions,
        } => {
            let plan = match parse_plan(&actions) {
                Ok(plan) => plan,
                Err(e) => fail(&e.to_string()),
            };
            let grid: Grid = read_json(file, stdin);
            print_json(&replay(grid, &plan));
        }
        Commands::Randomize {
            file,
            stdin,
            steps,
            seed,
        } => {
            let grid: Grid = read_json(file, stdin);
            let mut rng = StdRng::seed_from_u64(seed);
            let start = State::new(grid);

            let (end, actions) = randomize(&start, steps, &ColorSpace::palette(), &mut rng);
            print_json(&ExerciseOutput {
                input: start.to_grid(),
                output: end.into(),
                actions,
            });
        }
    }
}

/// Read and parse JSON from a file or stdin, exiting on failure
fn read_json<T: DeserializeOwned>(file: Option<PathBuf>, stdin: bool) -> T {
    let json_content = if stdin {
        let mut buffer = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buffer) {
            fail(&format!("failed to read from stdin: {}", e));
        }
        buffer
    } else if let Some(path) = file {
        match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => fail(&format!("failed to read file {:?}: {}", path, e)),
        }
    } else {
        fail("must provide either a file path or --stdin");
    };

    match serde_json::from_str(&json_content) {
        Ok(value) => value,
        Err(e) => fail(&format!("error parsing JSON: {}", e)),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&format!("error serializing output: {}", e)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
