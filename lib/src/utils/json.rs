use std::fs::{File, create_dir_all};
use std::io::{Result, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use serde_json::to_string_pretty;

pub const OUTPUT_DIR: &str = "target";

/// Writes `value` as pretty JSON to `target/<filename>` and returns the full path.
pub fn write<T: Serialize + ?Sized>(value: &T, filename: &str) -> Result<PathBuf> {
    let json: String = to_string_pretty(value)?;
    let dir: &Path = Path::new(OUTPUT_DIR);

    create_dir_all(dir)?;

    let path: PathBuf = dir.join(filename);
    let mut file: File = File::create(&path)?;

    file.write_all(json.as_bytes())?;
    info!("Results saved to {}", path.display());

    return Ok(path);
}
