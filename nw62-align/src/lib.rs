//! Global protein alignment and variant analysis.
//!
//! Aligns two amino-acid sequences end to end with Needleman-Wunsch under the
//! BLOSUM62 matrix and a linear gap penalty, then derives identity, similarity,
//! and gap statistics and segments the alignment into classified variant
//! blocks.
//!
//! # Quick start
//!
//! ```
//! use nw62_align::{analyze, BlockType, GapPenalty};
//!
//! let analysis = analyze(b"AIHV", b"VI", GapPenalty::default()).unwrap();
//! assert_eq!(analysis.alignment.score, -2);
//! assert_eq!(analysis.alignment.aligned_seq2, b"-V-I");
//! assert_eq!(analysis.variants[0].block_type, BlockType::Complex);
//! ```

pub mod types;
pub mod scoring;
pub mod needleman_wunsch;
pub mod stats;
pub mod variants;
pub mod input;
pub mod history;
pub mod render;
pub mod batch;

pub use types::{AlignmentResult, ColumnKind, GAP};
pub use scoring::{GapPenalty, Scorer, SubstitutionClass, AMINO_ACIDS};
pub use needleman_wunsch::needleman_wunsch;
pub use stats::{alignment_stats, length_disparity, AlignmentStats, Percent};
pub use variants::{variant_blocks, BlockType, Substitution, VariantBlock};
pub use input::sanitize_sequence;
pub use history::{History, HistoryEntry, DEFAULT_HISTORY_CAPACITY};
pub use render::{render_alignment, render_variants, DEFAULT_LINE_WIDTH};
pub use batch::align_batch;

use nw62_core::{Nw62Error, Result};

/// An alignment together with everything derived from it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    pub alignment: AlignmentResult,
    pub stats: AlignmentStats,
    /// Variant blocks in column order; empty for a perfect match.
    pub variants: Vec<VariantBlock>,
}

impl Analysis {
    /// Whether the two sequences aligned without a single differing column.
    pub fn is_perfect_match(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Globally align two non-empty sequences.
///
/// # Errors
///
/// Returns [`Nw62Error::InvalidInput`] if either sequence is empty.
pub fn align(seq1: &[u8], seq2: &[u8], gap_penalty: impl Into<GapPenalty>) -> Result<AlignmentResult> {
    ensure_non_empty(seq1, seq2)?;
    Ok(needleman_wunsch(seq1, seq2, &Scorer::new(gap_penalty)))
}

/// Align two non-empty sequences, then compute statistics and variant blocks.
///
/// # Errors
///
/// Returns [`Nw62Error::InvalidInput`] if either sequence is empty.
pub fn analyze(seq1: &[u8], seq2: &[u8], gap_penalty: impl Into<GapPenalty>) -> Result<Analysis> {
    analyze_with(seq1, seq2, &Scorer::new(gap_penalty))
}

/// Like [`analyze`], reusing an existing scorer for all three passes.
pub fn analyze_with(seq1: &[u8], seq2: &[u8], scorer: &Scorer) -> Result<Analysis> {
    ensure_non_empty(seq1, seq2)?;
    let alignment = needleman_wunsch(seq1, seq2, scorer);
    let stats = AlignmentStats::from_result(&alignment, scorer);
    let variants = variant_blocks(&alignment.aligned_seq1, &alignment.aligned_seq2, scorer);
    Ok(Analysis {
        alignment,
        stats,
        variants,
    })
}

fn ensure_non_empty(seq1: &[u8], seq2: &[u8]) -> Result<()> {
    if seq1.is_empty() || seq2.is_empty() {
        return Err(Nw62Error::InvalidInput(
            "sequences must not be empty".into(),
        ));
    }
    Ok(())
}
