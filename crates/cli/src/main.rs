// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hr_fixtures::{Dataset, GeneratorConfig, NameGenerator, generate, select_name_generator};
use hr_fixtures_export::write_dataset;
use time::Date;
use time::macros::format_description;
use tracing::{error, info};

/// HR Fixtures - deterministic synthetic HR dataset generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the CSV tables are written to
    #[arg(short, long, default_value = "data")]
    output_dir: PathBuf,

    /// Seed for the random stream
    #[arg(short, long, env = "HR_FIXTURES_SEED", default_value_t = 42)]
    seed: u64,

    /// The simulated "now" (YYYY-MM-DD); nothing is dated after it
    #[arg(long, value_parser = parse_date)]
    as_of: Option<Date>,

    /// External name pool JSON; the embedded pool is used otherwise
    #[arg(long)]
    name_pool: Option<PathBuf>,
}

impl Args {
    /// Applies the arguments on top of the default configuration.
    fn config(&self) -> GeneratorConfig {
        let defaults: GeneratorConfig = GeneratorConfig::default();
        GeneratorConfig {
            seed: self.seed,
            as_of: self.as_of.unwrap_or(defaults.as_of),
            name_pool: self.name_pool.clone(),
            ..defaults
        }
    }
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config: GeneratorConfig = args.config();
    let names: Box<dyn NameGenerator> = select_name_generator(config.name_pool.as_deref());

    let dataset: Dataset = generate(&config, names.as_ref())?;
    write_dataset(&dataset, &args.output_dir)?;

    for (table, rows) in dataset.table_counts() {
        info!(table, rows, "Table written");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(
        seed = args.seed,
        output_dir = %args.output_dir.display(),
        "Starting HR fixture generation"
    );

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Generation failed");
            ExitCode::FAILURE
        }
    }
}
