use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use actiongen::command::Balance;
use actiongen::commands::gen;
use actiongen::generator::{GenerateOptions, DEFAULT_ADDS, DEFAULT_MAX_TIME};
use actiongen::logging::{self, LogLevel};

#[derive(Parser, Debug)]
#[command(name = "actiongen")]
#[command(version)]
#[command(about = "Generate test cases for moving-average services")]
#[command(long_about = None)]
struct Cli {
    /// An action to interleave
    #[arg(required = true, num_args = 1..)]
    actions: Vec<String>,
    /// Number of calls to add (per action) to interleave
    #[arg(long = "add", default_value_t = DEFAULT_ADDS)]
    add: usize,
    /// Maximum time an action can take
    #[arg(long = "maxtime", default_value_t = DEFAULT_MAX_TIME, allow_negative_numbers = true)]
    maxtime: f64,
    /// Output path, relative to the current directory
    #[arg(long = "csv")]
    csv: PathBuf,
    /// Balance between read and write commands
    #[arg(long = "balance", value_enum, default_value_t = Balance::Balanced)]
    balance: Balance,
    /// Log level
    #[arg(long = "log", value_enum, default_value_t = LogLevel::Info)]
    log: LogLevel,
    /// Seed for reproducible output
    #[arg(long = "seed")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log);
    debug!(?cli, "parsed arguments");

    let options = GenerateOptions {
        actions: cli.actions,
        adds_per_action: cli.add,
        max_time: cli.maxtime,
        balance: cli.balance,
    };

    gen::handle_gen(options, cli.csv, cli.seed)?;

    Ok(())
}
