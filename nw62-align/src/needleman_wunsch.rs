//! Needleman-Wunsch global alignment with a linear gap penalty.
//!
//! A single dynamic programming matrix `H` of size `(m + 1) x (n + 1)`:
//!
//! - `H[i][0] = i * gap` and `H[0][j] = j * gap` (all-gap prefixes)
//! - `H[i][j] = max(H[i-1][j-1] + s(a_i, b_j), H[i-1][j] + gap, H[i][j-1] + gap)`
//!
//! Traceback walks from `(m, n)` back to the top row or left column, preferring
//! the diagonal, then up, then left whenever several predecessors reproduce the
//! current cell. That order fixes which of several optimal alignments is
//! returned.

use crate::scoring::Scorer;
use crate::types::{AlignmentResult, GAP};

/// One move of the traceback walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Consume one residue from each sequence.
    Diagonal,
    /// Consume a residue of sequence 1 against a gap in sequence 2.
    Up,
    /// Consume a residue of sequence 2 against a gap in sequence 1.
    Left,
}

/// Perform global (Needleman-Wunsch) alignment of `seq1` against `seq2`.
///
/// Total over all inputs: an empty sequence yields a full-gap alignment against
/// the other one (or an empty alignment when both are empty). Residues are not
/// checked against the alphabet; anything unknown scores as the gap penalty.
/// Callers wanting the empty-input rejection should use [`crate::align`].
pub fn needleman_wunsch(seq1: &[u8], seq2: &[u8], scorer: &Scorer) -> AlignmentResult {
    let m = seq1.len();
    let n = seq2.len();
    let gap = i64::from(scorer.gap_penalty());

    let cols = n + 1;
    let idx = |i: usize, j: usize| -> usize { i * cols + j };
    let sub = |i: usize, j: usize| -> i64 { i64::from(scorer.score(seq1[i - 1], seq2[j - 1])) };

    // H[i][j]: best score for aligning seq1[..i] with seq2[..j]
    let mut h = vec![0i64; (m + 1) * cols];

    for i in 0..=m {
        h[idx(i, 0)] = i as i64 * gap;
    }
    for j in 0..=n {
        h[idx(0, j)] = j as i64 * gap;
    }

    for i in 1..=m {
        for j in 1..=n {
            let diag = h[idx(i - 1, j - 1)] + sub(i, j);
            let up = h[idx(i - 1, j)] + gap;
            let left = h[idx(i, j - 1)] + gap;
            h[idx(i, j)] = diag.max(up).max(left);
        }
    }

    let score = h[idx(m, n)];

    // Built back to front, reversed once at the end.
    let mut aligned_seq1 = Vec::with_capacity(m + n);
    let mut aligned_seq2 = Vec::with_capacity(m + n);

    let mut i = m;
    let mut j = n;

    while i > 0 && j > 0 {
        let here = h[idx(i, j)];
        let step = if here == h[idx(i - 1, j - 1)] + sub(i, j) {
            Step::Diagonal
        } else if here == h[idx(i - 1, j)] + gap {
            Step::Up
        } else {
            Step::Left
        };

        match step {
            Step::Diagonal => {
                aligned_seq1.push(seq1[i - 1]);
                aligned_seq2.push(seq2[j - 1]);
                i -= 1;
                j -= 1;
            }
            Step::Up => {
                aligned_seq1.push(seq1[i - 1]);
                aligned_seq2.push(GAP);
                i -= 1;
            }
            Step::Left => {
                aligned_seq1.push(GAP);
                aligned_seq2.push(seq2[j - 1]);
                j -= 1;
            }
        }
    }

    // One sequence is exhausted; the rest of the other goes against gaps.
    while i > 0 {
        aligned_seq1.push(seq1[i - 1]);
        aligned_seq2.push(GAP);
        i -= 1;
    }
    while j > 0 {
        aligned_seq1.push(GAP);
        aligned_seq2.push(seq2[j - 1]);
        j -= 1;
    }

    aligned_seq1.reverse();
    aligned_seq2.reverse();

    log::debug!(
        "needleman-wunsch {}x{} (gap {}): score {}, {} columns",
        m,
        n,
        gap,
        score,
        aligned_seq1.len()
    );

    AlignmentResult {
        score,
        aligned_seq1,
        aligned_seq2,
        seq1: seq1.to_vec(),
        seq2: seq2.to_vec(),
        gap_penalty: scorer.gap_penalty().into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nw(a: &[u8], b: &[u8], gap: i32) -> AlignmentResult {
        needleman_wunsch(a, b, &Scorer::new(gap))
    }

    #[test]
    fn identical_sequences() {
        let result = nw(b"ACD", b"ACD", -4);
        // A=4, C=9, D=6
        assert_eq!(result.score, 19);
        assert_eq!(result.aligned_seq1, b"ACD");
        assert_eq!(result.aligned_seq2, b"ACD");
    }

    #[test]
    fn mismatches_without_gaps() {
        let result = nw(b"AIHV", b"VIHA", -4);
        // A/V=0, I/I=4, H/H=8, V/A=0
        assert_eq!(result.score, 12);
        assert_eq!(result.aligned_seq1, b"AIHV");
        assert_eq!(result.aligned_seq2, b"VIHA");
    }

    #[test]
    fn shorter_sequence_gets_gaps() {
        let result = nw(b"AIHV", b"VI", -4);
        assert_eq!(result.score, -2);
        assert_eq!(result.aligned_seq1, b"AIHV");
        assert_eq!(result.aligned_seq2, b"-V-I");
    }

    #[test]
    fn classic_protein_pair() {
        let result = nw(b"HEAGAWGHEE", b"PAWHEAE", -4);
        assert_eq!(result.score, 12);
        assert_eq!(result.aligned_seq1, b"HEAGAWGHE-E");
        assert_eq!(result.aligned_seq2, b"--P-AW-HEAE");
    }

    #[test]
    fn unknown_residue_scores_as_gap_penalty() {
        let scorer = Scorer::new(-4);
        let result = needleman_wunsch(b"AXC", b"ARC", &scorer);
        // A/A=4, X/R=gap, C/C=9
        assert_eq!(result.score, 9);
        assert_eq!(result.aligned_seq1, b"AXC");
        assert_eq!(result.aligned_seq2, b"ARC");
        assert_eq!(scorer.score(b'X', b'R'), scorer.gap_penalty());

        // The fallback follows whatever penalty is in force.
        assert_eq!(nw(b"AXC", b"ARC", -1).score, 12);
        // X never matches itself.
        assert_eq!(nw(b"AXC", b"AXC", -4).score, 9);

        let result = nw(b"MKXV", b"MKV", -4);
        assert_eq!(result.score, 10);
        assert_eq!(result.aligned_seq1, b"MKXV");
        assert_eq!(result.aligned_seq2, b"MK-V");
    }

    #[test]
    fn internal_deletion() {
        let result = nw(b"ACDEFGHIKL", b"ACDEKL", -4);
        assert_eq!(result.score, 17);
        assert_eq!(result.aligned_seq2, b"ACDE----KL");
    }

    #[test]
    fn gap_in_first_sequence() {
        let result = nw(b"AI", b"AVI", -1);
        assert_eq!(result.score, 7);
        assert_eq!(result.aligned_seq1, b"A-I");
        assert_eq!(result.aligned_seq2, b"AVI");
    }

    #[test]
    fn diagonal_wins_ties() {
        // (2,1): diagonal A/A and up both give 4; diagonal is taken first.
        let result = nw(b"AA", b"A", 0);
        assert_eq!(result.score, 4);
        assert_eq!(result.aligned_seq1, b"AA");
        assert_eq!(result.aligned_seq2, b"-A");
    }

    #[test]
    fn up_beats_left_on_ties() {
        // With a free gap, W/C (-2) loses to gaps; up and left tie at (1,1).
        let result = nw(b"W", b"C", 0);
        assert_eq!(result.score, 0);
        assert_eq!(result.aligned_seq1, b"-W");
        assert_eq!(result.aligned_seq2, b"C-");
    }

    #[test]
    fn zero_gap_penalty_terminates() {
        let result = nw(b"ACDE", b"ACDE", 0);
        assert_eq!(result.score, 24);
        assert_eq!(result.aligned_seq1, b"ACDE");
    }

    #[test]
    fn positive_gap_penalty_prefers_gaps() {
        let result = nw(b"MKVLA", b"MKVLA", 5);
        assert_eq!(result.score, 50);
        assert_eq!(result.aligned_seq1, b"-----MKVLA");
        assert_eq!(result.aligned_seq2, b"MKVLA-----");
    }

    #[test]
    fn empty_first_sequence() {
        let result = nw(b"", b"ACD", -4);
        assert_eq!(result.score, -12);
        assert_eq!(result.aligned_seq1, b"---");
        assert_eq!(result.aligned_seq2, b"ACD");
    }

    #[test]
    fn empty_second_sequence() {
        let result = nw(b"ACD", b"", -4);
        assert_eq!(result.score, -12);
        assert_eq!(result.aligned_seq1, b"ACD");
        assert_eq!(result.aligned_seq2, b"---");
    }

    #[test]
    fn both_empty() {
        let result = nw(b"", b"", -4);
        assert_eq!(result.score, 0);
        assert!(result.is_empty());
    }

    #[test]
    fn keeps_inputs_and_penalty() {
        let result = nw(b"GVYY", b"D", -4);
        assert_eq!(result.score, -13);
        assert_eq!(result.aligned_seq2, b"D---");
        assert_eq!(result.seq1, b"GVYY");
        assert_eq!(result.seq2, b"D");
        assert_eq!(result.gap_penalty.value(), -4);
    }

    #[test]
    fn lowercase_input_scores_like_uppercase() {
        let lower = nw(b"aihv", b"vi", -4);
        assert_eq!(lower.score, -2);
        assert_eq!(lower.aligned_seq1, b"aihv");
        assert_eq!(lower.aligned_seq2, b"-v-i");
    }

    #[test]
    fn extreme_gap_penalty_does_not_overflow() {
        let result = nw(b"ACDEFGHIKL", b"A", i32::MIN);
        assert_eq!(result.aligned_seq1.len(), result.aligned_seq2.len());
    }
}
