//! Normalization of raw user-supplied sequence text.
//!
//! The engine assumes clean input; this is the step that produces it.

use nw62_core::{Nw62Error, Result};

use crate::scoring::is_amino_acid;

/// Upper-case `raw` and keep only the 20 alphabet letters.
///
/// Whitespace, line breaks, digits, gap markers, and any other symbol are
/// dropped silently.
///
/// # Errors
///
/// Returns [`Nw62Error::InvalidInput`] if nothing remains.
pub fn sanitize_sequence(raw: &str) -> Result<Vec<u8>> {
    let seq: Vec<u8> = raw
        .trim()
        .bytes()
        .map(|b| b.to_ascii_uppercase())
        .filter(|&b| is_amino_acid(b))
        .collect();

    if seq.is_empty() {
        return Err(Nw62Error::InvalidInput(
            "sequence contains no amino acid residues".into(),
        ));
    }

    if seq.len() != raw.trim().len() {
        log::debug!(
            "sanitized sequence: kept {} of {} characters",
            seq.len(),
            raw.trim().len()
        );
    }

    Ok(seq)
}
