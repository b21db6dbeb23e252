// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use dp_drills::statistics::CounterValue;
use dp_drills::validation::{
    non_negative, non_negative_all, non_negative_all_usize, non_negative_usize,
};
use dp_drills::{knapsack, memo, rainwater, sieve, MemoTable, Selection};

#[derive(Parser)]
#[command(name = "dp-drills")]
#[command(about = "Dynamic-programming drills: knapsack, memoized Fibonacci, rainwater, primes")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Best value of a 0/1 knapsack
    #[command(allow_negative_numbers = true)]
    Knapsack {
        /// Weight capacity
        #[arg(short = 'c', long)]
        capacity: i64,
        /// Item weights, comma separated
        #[arg(short = 'w', long, value_delimiter = ',', required = true)]
        weights: Vec<i64>,
        /// Item values, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        values: Vec<i64>,
        /// Consider only the first N items (defaults to all)
        #[arg(short = 'n', long)]
        items: Option<i64>,
        /// Use a single rolling row instead of the full table
        #[arg(long)]
        rolling: bool,
    },

    /// The nth Fibonacci number
    #[command(allow_negative_numbers = true)]
    Fib {
        /// Index into the sequence
        n: i64,
    },

    /// Water captured between histogram bars
    #[command(allow_negative_numbers = true)]
    Rainwater {
        /// Bar heights, comma separated
        #[arg(value_delimiter = ',', required = true)]
        heights: Vec<i64>,
    },

    /// Primes up to a limit
    #[command(allow_negative_numbers = true)]
    Primes {
        /// Inclusive upper bound
        limit: i64,
    },
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
enum Report {
    Knapsack {
        value: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        selection: Option<Selection>,
    },
    Fib {
        n: u64,
        value: u64,
        memo_entries: usize,
        statistics: Vec<CounterValue>,
    },
    Rainwater {
        water: u64,
    },
    Primes {
        primes: Vec<usize>,
    },
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Knapsack { value, selection } => {
                write!(f, "Best value: {}", value)?;
                if let Some(selection) = selection {
                    write!(
                        f,
                        "\nItems: {:?} (total weight {})",
                        selection.items, selection.weight
                    )?;
                }
                Ok(())
            }
            Report::Fib {
                n,
                value,
                memo_entries,
                statistics,
            } => {
                write!(f, "fib({}) = {}\nMemo entries: {}", n, value, memo_entries)?;
                for counter in statistics {
                    write!(f, "\n  {}: {}", counter.name, counter.value)?;
                }
                Ok(())
            }
            Report::Rainwater { water } => write!(f, "Amount of water captured: {}", water),
            Report::Primes { primes } => write!(f, "{:?}", primes),
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<Report> {
    match command {
        Commands::Knapsack {
            capacity,
            weights,
            values,
            items,
            rolling,
        } => {
            let capacity = non_negative_usize("capacity", capacity)?;
            let weights = non_negative_all_usize("weights", &weights)?;
            let values = non_negative_all("values", &values)?;
            let item_count = match items {
                Some(items) => non_negative_usize("items", items)?,
                None => weights.len(),
            };

            if rolling {
                let value = knapsack::solve_rolling(item_count, capacity, &weights, &values)?;
                return Ok(Report::Knapsack {
                    value,
                    selection: None,
                });
            }
            let selection =
                knapsack::solve_with_selection(item_count, capacity, &weights, &values)
                    .context("solving the knapsack")?;
            Ok(Report::Knapsack {
                value: selection.value,
                selection: Some(selection),
            })
        }
        Commands::Fib { n } => {
            let n = non_negative("n", n)?;
            let mut table = MemoTable::new();
            let value = memo::fib(n, &mut table)?;
            Ok(Report::Fib {
                n,
                value,
                memo_entries: table.len(),
                statistics: table.statistics().snapshot(),
            })
        }
        Commands::Rainwater { heights } => {
            let heights = non_negative_all("heights", &heights)?;
            Ok(Report::Rainwater {
                water: rainwater::captured_water(&heights)?,
            })
        }
        Commands::Primes { limit } => {
            let limit = non_negative_usize("limit", limit)?;
            Ok(Report::Primes {
                primes: sieve::primes_up_to(limit)?,
            })
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = run(cli.command)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
