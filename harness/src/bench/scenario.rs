use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem::replace;
use std::slice::Iter;
use std::str::FromStr;

use crate::bench::types::{RawScenario, Results, Scenario, ScenarioResult};

use lib::{Error, Result};

use anyhow::{Context, anyhow};

impl Scenario {
    pub fn new(n: i64, k: i64) -> Result<Self> {
        let n: usize = usize::try_from(n).map_err(|_| Error::negative("n", n))?;
        let k: usize = usize::try_from(k).map_err(|_| Error::negative("k", k))?;
        return Ok(Self { n, k });
    }

    pub fn label(&self) -> String {
        return self.to_string();
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        return write!(f, "n={}, k={}", self.n, self.k);
    }
}

impl RawScenario {
    pub fn validate(&self) -> Result<Scenario> {
        return Scenario::new(self.n, self.k);
    }
}

impl From<(usize, usize)> for RawScenario {
    fn from((n, k): (usize, usize)) -> Self {
        return Self {
            n: i64::try_from(n).unwrap_or(i64::MAX),
            k: i64::try_from(k).unwrap_or(i64::MAX),
        };
    }
}

impl FromStr for RawScenario {
    type Err = anyhow::Error;

    /// Parses `<n>x<k>`, e.g. `200x10`.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (n, k) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| anyhow!("Expected <n>x<k>, got `{}`.", s))?;
        let n: i64 = n.trim().parse().with_context(|| format!("Invalid node count `{}`.", n))?;
        let k: i64 = k.trim().parse().with_context(|| format!("Invalid body length `{}`.", k))?;
        return Ok(Self { n, k });
    }
}

impl ScenarioResult {
    /// Summarises `runs_ms`; the average is the plain arithmetic mean.
    ///
    /// At least one run is required.
    pub fn from_runs(scenario: Scenario, runs_ms: Vec<f64>) -> Result<Self> {
        if runs_ms.is_empty() {
            return Err(Error::InvalidArgument {
                name: "num_runs",
                value: 0,
                reason: "must be at least 1",
            });
        }

        let count: f64 = runs_ms.len() as f64;
        let total: f64 = runs_ms.iter().sum();
        let min_ms: f64 = runs_ms.iter().copied().fold(f64::INFINITY, f64::min);
        let max_ms: f64 = runs_ms.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        return Ok(Self {
            label: scenario.label(),
            n: scenario.n,
            k: scenario.k,
            average_ms: total / count,
            runs_ms,
            min_ms,
            max_ms,
        });
    }
}

impl Results {
    pub fn new() -> Self {
        return Self { entries: Vec::new() };
    }

    /// Stores `result` under its label. A result already stored under the same label is
    /// replaced in place, keeping its position, and returned.
    pub fn insert(&mut self, result: ScenarioResult) -> Option<ScenarioResult> {
        return match self.entries.iter_mut().find(|entry| entry.label == result.label) {
            Some(slot) => Some(replace(slot, result)),
            None => {
                self.entries.push(result);
                None
            }
        };
    }

    pub fn get(&self, label: &str) -> Option<&ScenarioResult> {
        return self.entries.iter().find(|entry| entry.label == label);
    }

    pub fn average_ms(&self, label: &str) -> Option<f64> {
        return self.get(label).map(|entry| entry.average_ms);
    }

    pub fn labels(&self) -> Vec<&str> {
        return self.entries.iter().map(|entry| entry.label.as_str()).collect();
    }

    pub fn iter(&self) -> Iter<'_, ScenarioResult> {
        return self.entries.iter();
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }
}

impl<'a> IntoIterator for &'a Results {
    type Item = &'a ScenarioResult;
    type IntoIter = Iter<'a, ScenarioResult>;

    fn into_iter(self) -> Self::IntoIter {
        return self.entries.iter();
    }
}
