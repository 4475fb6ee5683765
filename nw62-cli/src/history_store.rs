//! JSON persistence for the comparison history.

use anyhow::{Context, Result};
use nw62_align::{History, HistoryEntry};
use std::path::Path;

/// Load saved comparisons from `path`, keeping at most `capacity` of them.
///
/// A missing file is an empty history.
pub fn load(path: &Path, capacity: usize) -> Result<History> {
    if !path.exists() {
        log::debug!("No history file at {}, starting empty", path.display());
        return Ok(History::new(capacity));
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file: {}", path.display()))?;
    let entries: Vec<HistoryEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse history file: {}", path.display()))?;

    log::debug!("Loaded {} history entries from {}", entries.len(), path.display());
    Ok(History::from_entries(capacity, entries))
}

/// Write `history` to `path` as a JSON array, most recent first.
pub fn save(path: &Path, history: &History) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let entries: Vec<&HistoryEntry> = history.iter().collect();
    let content = serde_json::to_string_pretty(&entries).context("Failed to serialize history")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write history file: {}", path.display()))?;

    log::debug!("Saved {} history entries to {}", history.len(), path.display());
    Ok(())
}
