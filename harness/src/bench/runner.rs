use std::time::Duration;

use crate::bench::platform;
use crate::bench::stopwatch::{Stopwatch, WallClock};
use crate::bench::types::{Config, Event, Harness, Phase, Results, Scenario, ScenarioResult, Timed};

use chain::clock::{Clock, SystemClock};
use chain::types::{Chain, ChainBuilder};
use lib::{Error, Result};

use log::{debug, info, warn};
use rand::Rng;
use rand::rngs::ThreadRng;

impl Harness<ThreadRng, SystemClock, WallClock> {
    pub fn new(config: &Config) -> Self {
        return Self::with_parts(ChainBuilder::new(config.algorithm), WallClock).with_release_timing(config.time_release);
    }

    /// Validates `config` and applies its thread policy before building the harness.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        config.validate()?;
        platform::apply(config)?;
        return Ok(Self::new(config));
    }
}

impl<R: Rng, C: Clock, S: Stopwatch> Harness<R, C, S> {
    pub fn with_parts(builder: ChainBuilder<R, C>, stopwatch: S) -> Self {
        return Self {
            builder,
            stopwatch,
            time_release: false,
            phase: Phase::Idle,
        };
    }

    pub fn with_release_timing(mut self, enabled: bool) -> Self {
        self.time_release = enabled;
        return self;
    }

    pub fn phase(&self) -> Phase {
        return self.phase;
    }

    /// Builds one chain for `scenario` and returns the elapsed build time in milliseconds.
    ///
    /// The chain is always released before returning; the release only counts towards the
    /// measurement when release timing is enabled.
    pub fn run_scenario(&mut self, scenario: Scenario) -> f64 {
        let Scenario { n, k } = scenario;
        let elapsed: Duration = if self.time_release {
            self.stopwatch.time(|| self.builder.build(n, k).release()).1
        } else {
            let (chain, elapsed): Timed<Chain> = self.stopwatch.time(|| self.builder.build(n, k));
            chain.release();
            elapsed
        };
        return elapsed.as_secs_f64() * 1000.0;
    }

    pub fn run_all(&mut self, scenarios: &[Scenario], num_runs: usize) -> Result<Results> {
        return self.run_all_with(scenarios, num_runs, |_, _| {});
    }

    /// Runs every scenario `num_runs` times in declaration order.
    ///
    /// `observer` sees every finished run while the harness is `Running`, then the averaged
    /// result once it is `Averaged`.
    pub fn run_all_with<F>(&mut self, scenarios: &[Scenario], num_runs: usize, mut observer: F) -> Result<Results>
    where
        F: FnMut(Phase, Event<'_>),
    {
        if num_runs == 0 {
            return Err(Error::InvalidArgument {
                name: "num_runs",
                value: 0,
                reason: "must be at least 1",
            });
        }

        let mut results: Results = Results::new();

        for scenario in scenarios {
            let mut runs_ms: Vec<f64> = Vec::with_capacity(num_runs);

            for run in 0..num_runs {
                self.phase = Phase::Running { run };
                let elapsed_ms: f64 = self.run_scenario(*scenario);
                debug!("{} run {}/{}: {:.4} ms", scenario, run.saturating_add(1), num_runs, elapsed_ms);
                observer(self.phase, Event::Run { scenario: *scenario, run, elapsed_ms });
                runs_ms.push(elapsed_ms);
            }

            self.phase = Phase::Averaged;
            let result: ScenarioResult = ScenarioResult::from_runs(*scenario, runs_ms)?;
            debug!("{} averaged {:.4} ms over {} runs", result.label, result.average_ms, num_runs);
            observer(self.phase, Event::Averaged(&result));

            if let Some(previous) = results.insert(result) {
                warn!("Scenario {} declared more than once, replacing average of {:.4} ms.", previous.label, previous.average_ms);
            }
            self.phase = Phase::Idle;
        }
        return Ok(results);
    }
}

pub fn run(config: &Config) -> anyhow::Result<Results> {
    return run_with(config, |_, _| {});
}

/// Runs the configured scenarios on a wall-clock harness.
pub fn run_with<F>(config: &Config, observer: F) -> anyhow::Result<Results>
where
    F: FnMut(Phase, Event<'_>),
{
    let mut harness: Harness<ThreadRng, SystemClock, WallClock> = Harness::from_config(config)?;
    let scenarios: Vec<Scenario> = config.scenario_list()?;

    info!(
        "Running {} scenarios x {} runs with {} (release {})",
        scenarios.len(),
        config.num_runs,
        config.algorithm,
        if config.time_release { "timed" } else { "untimed" }
    );
    return Ok(harness.run_all_with(&scenarios, config.num_runs, observer)?);
}
