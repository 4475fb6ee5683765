//! History command implementation - list, replay, or clear saved comparisons

use anyhow::{anyhow, Result};
use nw62_align::{analyze_with, HistoryEntry, Scorer};

use crate::config::Config;
use crate::history_store;
use crate::output::{analysis_output, history_listing, json_ok};
use crate::HistoryArgs;

pub fn execute(config: &Config, args: &HistoryArgs) -> Result<String> {
    let path = config.history_path();
    let mut history = history_store::load(&path, config.history.capacity)?;

    if args.clear {
        let removed = history.len();
        history.clear();
        history_store::save(&path, &history)?;
        log::info!("Cleared {} saved comparison(s) from {}", removed, path.display());
        return Ok(if args.json {
            json_ok(&serde_json::json!({ "cleared": removed }))
        } else {
            format!("Cleared {removed} saved comparison(s)\n")
        });
    }

    if let Some(n) = args.rerun {
        let entry = n
            .checked_sub(1)
            .and_then(|index| history.get(index))
            .ok_or_else(|| anyhow!("No saved comparison #{n} ({} stored)", history.len()))?;
        return rerun(config, entry, args);
    }

    if args.json {
        let entries: Vec<&HistoryEntry> = history.iter().collect();
        Ok(json_ok(&entries))
    } else {
        Ok(history_listing(&history))
    }
}

/// Align a saved pair again under the gap penalty it was stored with.
fn rerun(config: &Config, entry: &HistoryEntry, args: &HistoryArgs) -> Result<String> {
    let saved = &entry.alignment;
    let scorer = Scorer::new(saved.gap_penalty);
    log::info!(
        "Re-running {} aa against {} aa (gap penalty {})",
        saved.seq1.len(),
        saved.seq2.len(),
        saved.gap_penalty
    );
    let analysis = analyze_with(&saved.seq1, &saved.seq2, &scorer)?;
    if analysis.alignment.score != saved.score {
        log::warn!("Score changed since it was saved: {} -> {}", saved.score, analysis.alignment.score);
    }
    Ok(analysis_output(&analysis, &scorer, args.json, config.line_width(args.width)))
}
