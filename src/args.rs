use std::path::PathBuf;

use harness::bench::types::{Config, RawScenario};
use lib::utils::hash::HashAlgorithm;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Times the construction of hash-linked node chains")]
pub struct Cli {
    /// JSON benchmark configuration; flags below override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Runs per scenario
    #[arg(short, long)]
    pub runs: Option<usize>,

    /// Scenario as <N>x<K> (N nodes, K values per node); repeat for several
    #[arg(short, long = "scenario", value_name = "NxK", value_parser = parse_scenario, allow_hyphen_values = true)]
    pub scenarios: Vec<RawScenario>,

    /// Digest algorithm: sha256 or blake3
    #[arg(short, long, value_parser = parse_algorithm)]
    pub algorithm: Option<HashAlgorithm>,

    /// Include chain release in the timed window
    #[arg(long)]
    pub time_release: bool,

    /// Pin the benchmark thread to this core
    #[arg(long, value_name = "ID")]
    pub core: Option<usize>,

    /// Thread priority on the 1-99 scale
    #[arg(long)]
    pub priority: Option<u8>,

    /// Save results in JSON format to target/FILENAME
    #[arg(long, value_name = "FILENAME")]
    pub json: Option<String>,
}

impl Cli {
    /// Configuration file (or defaults) with command line overrides applied.
    pub fn config(&self) -> Result<Config> {
        let mut config: Config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(runs) = self.runs {
            config.num_runs = runs;
        }
        if !self.scenarios.is_empty() {
            config.scenarios = self.scenarios.clone();
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if self.time_release {
            config.time_release = true;
        }
        if self.core.is_some() {
            config.core = self.core;
        }
        if let Some(priority) = self.priority {
            config.priority = priority;
        }

        config.validate()?;
        return Ok(config);
    }
}

fn parse_scenario(arg: &str) -> std::result::Result<RawScenario, String> {
    return arg.parse::<RawScenario>().map_err(|e| e.to_string());
}

fn parse_algorithm(arg: &str) -> std::result::Result<HashAlgorithm, String> {
    return HashAlgorithm::from_name(arg).map_err(|e| e.to_string());
}
