use crate::bench::types::Config;

use anyhow::{Result, anyhow};
use log::info;
use thread_priority::{ThreadPriority, ThreadPriorityValue, set_current_thread_priority};

/// Core and priority the benchmarking thread actually runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreadPolicy {
    pub core: Option<usize>,
    pub priority: Option<u8>,
}

/// Pins the calling thread and raises its priority as configured, so that timed runs
/// are not migrated between cores mid-measurement.
///
/// Settings the platform cannot honour are skipped with a warning and are left out of
/// the returned policy.
pub fn apply(config: &Config) -> Result<ThreadPolicy> {
    let priority: Option<u8> = match config.priority {
        0 => None,
        value => raise_priority(value)?,
    };
    let core: Option<usize> = match config.core {
        Some(core) => pin_core(core)?,
        None => None,
    };

    let policy: ThreadPolicy = ThreadPolicy { core, priority };
    if policy != ThreadPolicy::default() {
        info!("Benchmark thread policy: core {:?}, priority {:?}", policy.core, policy.priority);
    }
    return Ok(policy);
}

fn raise_priority(value: u8) -> Result<Option<u8>> {
    let level: ThreadPriorityValue = ThreadPriorityValue::try_from(value).map_err(|e| anyhow!("Invalid thread priority {}: {}", value, e))?;
    set_current_thread_priority(ThreadPriority::Crossplatform(level))
        .map_err(|e| anyhow!("Failed to raise benchmark thread priority to {} (may require elevated privileges): {:?}", value, e))?;
    return Ok(Some(value));
}

#[cfg(target_os = "linux")]
fn pin_core(core: usize) -> Result<Option<usize>> {
    affinity::set_thread_affinity(&[core])
        .map_err(|e| anyhow!("Failed to pin benchmark thread to core {} (may require elevated privileges): {}", core, e))?;
    return Ok(Some(core));
}

#[cfg(not(target_os = "linux"))]
fn pin_core(core: usize) -> Result<Option<usize>> {
    log::warn!("Thread affinity is only supported on Linux platforms, core {} ignored.", core);
    return Ok(None);
}
