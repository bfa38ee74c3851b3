use std::fs::read_to_string;
use std::path::Path;

use crate::bench::types::{Config, RawScenario, Scenario};

use lib::utils::hash::HashAlgorithm;
use lib::{DEFAULT_NUM_RUNS, DEFAULT_SCENARIOS};

use anyhow::{Context, Result, bail};
use serde_json::from_str;

// Highest value accepted by the crossplatform thread priority scale.
pub const MAX_PRIORITY: u8 = 99;

impl Default for Config {
    fn default() -> Self {
        return Self {
            scenarios: DEFAULT_SCENARIOS.iter().copied().map(RawScenario::from).collect(),
            num_runs: DEFAULT_NUM_RUNS,
            algorithm: HashAlgorithm::default(),
            time_release: false,
            core: None,
            priority: 0,
        };
    }
}

impl Config {
    /// Reads a JSON configuration file. Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text: String = read_to_string(path).with_context(|| format!("Failed to read config {}.", path.display()))?;
        let config: Config = from_str(&text).with_context(|| format!("Failed to parse config {}.", path.display()))?;

        config.validate()?;
        return Ok(config);
    }

    /// Validates the benchmark configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_runs == 0 {
            bail!("num_runs must be greater than 0.");
        }
        if self.scenarios.is_empty() {
            bail!("At least one scenario is required.");
        }
        self.scenario_list()?;
        if let Some(core) = self.core {
            if core >= num_cpus::get() {
                bail!("Core ID ({}) exceeds available cores ({}).", core, num_cpus::get().saturating_sub(1));
            }
        }
        if self.priority > MAX_PRIORITY {
            bail!("priority must be at most {}.", MAX_PRIORITY);
        }
        return Ok(());
    }

    /// Configured scenarios with negative counts rejected.
    pub fn scenario_list(&self) -> lib::Result<Vec<Scenario>> {
        return self.scenarios.iter().map(RawScenario::validate).collect();
    }
}
