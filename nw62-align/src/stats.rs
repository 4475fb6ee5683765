//! Descriptive statistics of a finished alignment.
//!
//! All percentages are in `[0, 100]` and are reported as `0.0` for an empty
//! alignment rather than NaN.

use core::fmt;

use crate::scoring::Scorer;
use crate::types::{AlignmentResult, ColumnKind};

/// Ungapped length ratio above which two inputs are flagged as too different
/// in length for the alignment to be meaningful.
pub const LENGTH_DISPARITY_THRESHOLD: f64 = 0.6;

/// Summary statistics of an aligned sequence pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentStats {
    /// Number of alignment columns.
    pub columns: usize,
    /// Columns whose two characters are identical.
    pub identical: usize,
    /// Identical columns plus residue pairs with a positive substitution score.
    pub similar: usize,
    /// Columns with a gap on either side.
    pub gap_count: usize,
    /// `100 * identical / columns`.
    pub identity: f64,
    /// `100 * similar / columns`; never below `identity`.
    pub similarity: f64,
    /// `100 * gap_count / columns`.
    pub gap_percent: f64,
    /// Advisory: the ungapped inputs differ in length by more than
    /// [`LENGTH_DISPARITY_THRESHOLD`] of the longer one.
    pub length_disparity: bool,
}

impl AlignmentStats {
    /// Compute statistics for an alignment produced by the engine.
    pub fn from_result(result: &AlignmentResult, scorer: &Scorer) -> Self {
        alignment_stats(
            &result.aligned_seq1,
            &result.aligned_seq2,
            result.seq1.len(),
            result.seq2.len(),
            scorer,
        )
    }
}

/// Compute statistics for an aligned pair.
///
/// `seq1_len` and `seq2_len` are the original ungapped input lengths, used
/// only for the length-disparity flag.
pub fn alignment_stats(
    aligned_seq1: &[u8],
    aligned_seq2: &[u8],
    seq1_len: usize,
    seq2_len: usize,
    scorer: &Scorer,
) -> AlignmentStats {
    debug_assert_eq!(aligned_seq1.len(), aligned_seq2.len());

    let mut columns = 0;
    let mut identical = 0;
    let mut similar = 0;
    let mut gap_count = 0;

    for (&a, &b) in aligned_seq1.iter().zip(aligned_seq2) {
        columns += 1;
        match ColumnKind::of(a, b) {
            ColumnKind::Identical => {
                identical += 1;
                similar += 1;
            }
            ColumnKind::Substitution => {
                if scorer.score(a, b) > 0 {
                    similar += 1;
                }
            }
            ColumnKind::GapInSeq1 | ColumnKind::GapInSeq2 => gap_count += 1,
        }
    }

    let length_disparity = length_disparity(seq1_len, seq2_len);
    if length_disparity {
        log::warn!(
            "input lengths {} and {} differ by more than {:.0}%; alignment may not be meaningful",
            seq1_len,
            seq2_len,
            LENGTH_DISPARITY_THRESHOLD * 100.0
        );
    }

    AlignmentStats {
        columns,
        identical,
        similar,
        gap_count,
        identity: percent(identical, columns),
        similarity: percent(similar, columns),
        gap_percent: percent(gap_count, columns),
        length_disparity,
    }
}

/// Whether `|len1 - len2| / max(len1, len2)` exceeds [`LENGTH_DISPARITY_THRESHOLD`].
///
/// Two empty inputs are not flagged.
pub fn length_disparity(len1: usize, len2: usize) -> bool {
    let longest = len1.max(len2);
    if longest == 0 {
        return false;
    }
    len1.abs_diff(len2) as f64 / longest as f64 > LENGTH_DISPARITY_THRESHOLD
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// A percentage shown with one decimal, ties rounded away from zero.
///
/// `Percent(31.25)` displays as `31.3`, where `{:.1}` alone would give `31.2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", (self.0 * 10.0).round() / 10.0)
    }
}
