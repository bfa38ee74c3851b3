pub mod error;
pub mod utils {
    pub mod hash;
    pub mod json;
}

pub use error::{Error, Result};

// Node body values are drawn uniformly from this inclusive range.
pub const DEFAULT_BODY_MIN: u32 = 1;
pub const DEFAULT_BODY_MAX: u32 = 100_000;
// Digest width in bytes, rendered as twice as many hex characters.
pub const DEFAULT_DIGEST_BYTES: usize = 32;
pub const DEFAULT_DIGEST_HEX_LEN: usize = DEFAULT_DIGEST_BYTES * 2;
// Seed text for the first node: two-digit day/month/year, 24-hour clock.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

// Benchmark harness.
pub const DEFAULT_NUM_RUNS: usize = 5;
pub const DEFAULT_SCENARIOS: [(usize, usize); 3] = [(3, 4), (10, 200), (200, 10)];
pub const DEFAULT_REPORT_PRECISION: usize = 4;
