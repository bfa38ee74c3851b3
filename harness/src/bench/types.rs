use std::time::Duration;

use chain::types::ChainBuilder;
use lib::utils::hash::HashAlgorithm;

use serde::{Deserialize, Serialize};

/// Validated node count `n` and body length `k` for one benchmark scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scenario {
    pub n: usize,
    pub k: usize,
}

/// Scenario as written in a configuration file or on the command line, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScenario {
    pub n: i64,
    pub k: i64,
}

/// Timings collected for one scenario, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub label: String,
    pub n: usize,
    pub k: usize,
    pub runs_ms: Vec<f64>,
    pub average_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Scenario results keyed by label, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Results {
    pub(crate) entries: Vec<ScenarioResult>,
}

/// Where the harness is within the current scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running { run: usize },
    Averaged,
}

/// Progress handed to a run observer together with the current [`Phase`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// One timed run of `scenario` finished.
    Run { scenario: Scenario, run: usize, elapsed_ms: f64 },
    /// Every run of a scenario finished and was summarised.
    Averaged(&'a ScenarioResult),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scenarios: Vec<RawScenario>,
    pub num_runs: usize,
    pub algorithm: HashAlgorithm,
    /// Include chain release in the timed window.
    pub time_release: bool,
    /// Pin the benchmarking thread to this core.
    pub core: Option<usize>,
    pub priority: u8,
}

pub struct Harness<R, C, S> {
    pub builder: ChainBuilder<R, C>,
    pub stopwatch: S,
    pub time_release: bool,
    pub(crate) phase: Phase,
}

/// Timing of one measured closure.
pub type Timed<T> = (T, Duration);
