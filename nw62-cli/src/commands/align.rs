//! Align command implementation - compare two protein sequences

use anyhow::{Context, Result};
use nw62_align::{analyze_with, sanitize_sequence, Analysis, HistoryEntry, Scorer};

use crate::config::Config;
use crate::history_store;
use crate::output::analysis_output;
use crate::OutputArgs;

pub fn execute(config: &Config, seq1: &str, seq2: &str, args: &OutputArgs) -> Result<String> {
    let seq1 = sanitize_sequence(seq1).context("Sequence 1 is not usable")?;
    let seq2 = sanitize_sequence(seq2).context("Sequence 2 is not usable")?;
    let gap_penalty = config.gap_penalty(args.gap_penalty.as_deref());

    log::info!(
        "Aligning {} aa against {} aa (gap penalty {})",
        seq1.len(),
        seq2.len(),
        gap_penalty
    );
    let scorer = Scorer::new(gap_penalty);
    let analysis = analyze_with(&seq1, &seq2, &scorer)?;
    log::info!(
        "Score {}, {} variant block(s)",
        analysis.alignment.score,
        analysis.variants.len()
    );

    if args.save {
        save(config, &analysis)?;
    }

    Ok(analysis_output(&analysis, &scorer, args.json, config.line_width(args.width)))
}

fn save(config: &Config, analysis: &Analysis) -> Result<()> {
    let path = config.history_path();
    let mut history = history_store::load(&path, config.history.capacity)?;
    history.push(HistoryEntry::from(analysis));
    history_store::save(&path, &history)?;
    log::info!("Saved comparison to {} ({} stored)", path.display(), history.len());
    Ok(())
}
