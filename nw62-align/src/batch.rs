//! Batch analysis over multiple sequence pairs.
//!
//! Every pair is independent and the scorer is read-only, so with the
//! `parallel` feature the pairs are spread over the rayon thread pool.

use nw62_core::Result;

use crate::scoring::{GapPenalty, Scorer};
use crate::{analyze_with, Analysis};

/// Analyze a batch of sequence pairs with one gap penalty.
///
/// Results are returned in the same order as `pairs`.
///
/// # Errors
///
/// Returns the first error encountered (an empty sequence in any pair).
pub fn align_batch(pairs: &[(&[u8], &[u8])], gap_penalty: GapPenalty) -> Result<Vec<Analysis>> {
    let scorer = Scorer::new(gap_penalty);
    log::debug!("batch of {} pairs, gap penalty {}", pairs.len(), gap_penalty);

    #[cfg(feature = "parallel")]
    let results = {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .map(|(seq1, seq2)| analyze_with(seq1, seq2, &scorer))
            .collect::<Result<Vec<_>>>()
    };

    #[cfg(not(feature = "parallel"))]
    let results = pairs
        .iter()
        .map(|(seq1, seq2)| analyze_with(seq1, seq2, &scorer))
        .collect::<Result<Vec<_>>>();

    results
}
