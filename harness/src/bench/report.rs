use std::fmt::{Display, Formatter, Result};

use crate::bench::types::{Results, ScenarioResult};

use lib::DEFAULT_REPORT_PRECISION;

impl Display for ScenarioResult {
    /// Example output: "n=3, k=4: 0.0412 ms"
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        return write!(f, "{}: {:.*} ms", self.label, DEFAULT_REPORT_PRECISION, self.average_ms);
    }
}

impl Display for Results {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for entry in self.iter() {
            writeln!(f, "{}", entry)?;
        }
        return Ok(());
    }
}
