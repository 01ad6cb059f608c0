//! JSON file export for reconnaissance results.

use anyhow::Context;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `value` as pretty JSON to `<dir>/<prefix>_<timestamp>.json` and
/// return the path written.
pub fn save_json<T: Serialize>(prefix: &str, dir: &Path, value: &T) -> anyhow::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("{prefix}_{timestamp}.json"));

    let file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, value)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!("saved {} results to {}", prefix, path.display());
    Ok(path)
}
