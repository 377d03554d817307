use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Overrides the activity-log location (used heavily by tests)
pub const DATA_DIR_ENV: &str = "GLAMSTRIDE_DATA_DIR";

/// Directory holding the persisted activity blob.
///
/// `GLAMSTRIDE_DATA_DIR` wins when set; otherwise the platform data dir:
/// - macOS: `~/Library/Application Support/glamstride/`
/// - Linux: `~/.local/share/glamstride/`
/// - Windows: `%APPDATA%\glamstride\`
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().context("Failed to resolve platform data directory")?;
    Ok(base.join("glamstride"))
}
