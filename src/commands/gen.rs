use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::csv_io::write_commands;
use crate::generator::{generate, GenerateOptions, GeneratedTest};

/// Generate a command script and write it to `csv`.
///
/// With a `seed` the same options always produce the same file; otherwise the
/// generator is seeded from system entropy.
pub fn handle_gen(
    options: GenerateOptions,
    csv: PathBuf,
    seed: Option<u64>,
) -> Result<GeneratedTest> {
    options.validate().context("Invalid generation options")?;

    let mut rng = match seed {
        Some(seed) => {
            debug!(seed, "seeding generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let test = generate(&options, &mut rng)?;

    write_commands(&csv, &test.commands)
        .with_context(|| format!("Failed to write CSV file: {}", csv.display()))?;

    info!(
        path = %csv.display(),
        body = test.body().len(),
        summary = test.summary().len(),
        "wrote test commands"
    );

    println!(
        "{} Wrote {} commands for {} action(s) ({} balance) to {}",
        "✓".green(),
        test.commands.len().to_string().bright_white(),
        test.averages.len().to_string().bright_white(),
        options.balance,
        csv.display().to_string().bright_blue()
    );

    Ok(test)
}
