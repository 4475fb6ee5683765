//! Segmentation of an alignment into variant blocks.
//!
//! A variant block is a maximal run of columns whose two characters differ.
//! Runs of identical columns separate blocks and are not reported. Each block
//! is classified from its per-side gap counts and substitution count:
//!
//! | gaps in seq1 | gaps in seq2 | substitutions | type |
//! |---|---|---|---|
//! | > 0 | 0 | 0 | [`BlockType::Deletion`] |
//! | 0 | > 0 | 0 | [`BlockType::Insertion`] |
//! | > 0 | > 0 | 0 | [`BlockType::Indel`] |
//! | 0 | 0 | > 0 | [`BlockType::Substitution`] |
//! | any gaps | | > 0 | [`BlockType::Complex`] |

use core::fmt;

use crate::scoring::{Scorer, SubstitutionClass};
use crate::types::ColumnKind;

/// Classification of a variant block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockType {
    /// Gaps only in sequence 1, no substitutions.
    Deletion,
    /// Gaps only in sequence 2, no substitutions.
    Insertion,
    /// Gaps on both sides, no substitutions.
    Indel,
    /// Substitutions only, no gaps.
    Substitution,
    /// Substitutions mixed with gaps.
    Complex,
}

impl BlockType {
    /// Classify a block from its gap and substitution counts.
    pub fn classify(gaps_seq1: usize, gaps_seq2: usize, substitutions: usize) -> Self {
        if substitutions == 0 {
            if gaps_seq1 > 0 && gaps_seq2 == 0 {
                BlockType::Deletion
            } else if gaps_seq2 > 0 && gaps_seq1 == 0 {
                BlockType::Insertion
            } else {
                BlockType::Indel
            }
        } else if gaps_seq1 == 0 && gaps_seq2 == 0 {
            BlockType::Substitution
        } else {
            BlockType::Complex
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            BlockType::Deletion => "Deletion",
            BlockType::Insertion => "Insertion",
            BlockType::Indel => "Indel",
            BlockType::Substitution => "Substitution Block",
            BlockType::Complex => "Complex (Indel + Sub)",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One substituted column inside a variant block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Substitution {
    /// Alignment column (1-based).
    pub position: usize,
    /// Residue in sequence 1.
    #[cfg_attr(feature = "serde", serde(with = "crate::types::residue_char"))]
    pub from: u8,
    /// Residue in sequence 2.
    #[cfg_attr(feature = "serde", serde(with = "crate::types::residue_char"))]
    pub to: u8,
    /// Pairwise substitution score.
    pub score: i32,
    /// Qualitative class of `score`.
    pub class: SubstitutionClass,
}

/// A maximal run of differing alignment columns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantBlock {
    /// First column of the block (1-based, inclusive).
    pub start: usize,
    /// Last column of the block (1-based, inclusive).
    pub end: usize,
    /// Aligned sequence 1 over `start..=end`.
    #[cfg_attr(feature = "serde", serde(with = "crate::types::residue_string"))]
    pub seq1: Vec<u8>,
    /// Aligned sequence 2 over `start..=end`.
    #[cfg_attr(feature = "serde", serde(with = "crate::types::residue_string"))]
    pub seq2: Vec<u8>,
    /// Gap markers in `seq1`.
    pub gaps_seq1: usize,
    /// Gap markers in `seq2`.
    pub gaps_seq2: usize,
    /// Classification from the gap and substitution counts.
    pub block_type: BlockType,
    /// Substituted columns, in order. Empty for pure indel blocks.
    pub substitutions: Vec<Substitution>,
}

impl VariantBlock {
    /// Number of columns in the block.
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Always false; blocks span at least one column.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether any column in the block is a substitution.
    pub fn has_substitutions(&self) -> bool {
        !self.substitutions.is_empty()
    }
}

/// Partition an aligned pair into variant blocks, in column order.
///
/// Returns an empty list when the two sequences are identical column for
/// column (a perfect match).
pub fn variant_blocks(aligned_seq1: &[u8], aligned_seq2: &[u8], scorer: &Scorer) -> Vec<VariantBlock> {
    debug_assert_eq!(aligned_seq1.len(), aligned_seq2.len());

    let len = aligned_seq1.len().min(aligned_seq2.len());
    let differs = |k: usize| aligned_seq1[k] != aligned_seq2[k];

    let mut blocks = Vec::new();
    let mut k = 0;

    while k < len {
        if !differs(k) {
            k += 1;
            continue;
        }

        let start = k;
        while k < len && differs(k) {
            k += 1;
        }

        let mut gaps_seq1 = 0;
        let mut gaps_seq2 = 0;
        let mut substitutions = Vec::new();

        for col in start..k {
            let (a, b) = (aligned_seq1[col], aligned_seq2[col]);
            match ColumnKind::of(a, b) {
                ColumnKind::GapInSeq1 => gaps_seq1 += 1,
                ColumnKind::GapInSeq2 => gaps_seq2 += 1,
                ColumnKind::Substitution => {
                    let score = scorer.score(a, b);
                    substitutions.push(Substitution {
                        position: col + 1,
                        from: a,
                        to: b,
                        score,
                        class: scorer.classify(score),
                    });
                }
                ColumnKind::Identical => {}
            }
        }

        let block_type = BlockType::classify(gaps_seq1, gaps_seq2, substitutions.len());
        log::trace!("variant block {}-{}: {}", start + 1, k, block_type);

        blocks.push(VariantBlock {
            start: start + 1,
            end: k,
            seq1: aligned_seq1[start..k].to_vec(),
            seq2: aligned_seq2[start..k].to_vec(),
            gaps_seq1,
            gaps_seq2,
            block_type,
            substitutions,
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(a: &[u8], b: &[u8]) -> Vec<VariantBlock> {
        variant_blocks(a, b, &Scorer::default())
    }

    #[test]
    fn classification_table() {
        assert_eq!(BlockType::classify(2, 0, 0), BlockType::Deletion);
        assert_eq!(BlockType::classify(0, 3, 0), BlockType::Insertion);
        assert_eq!(BlockType::classify(1, 1, 0), BlockType::Indel);
        assert_eq!(BlockType::classify(0, 0, 2), BlockType::Substitution);
        assert_eq!(BlockType::classify(1, 0, 1), BlockType::Complex);
        assert_eq!(BlockType::classify(0, 2, 1), BlockType::Complex);
        assert_eq!(BlockType::classify(1, 1, 1), BlockType::Complex);
    }

    #[test]
    fn labels() {
        assert_eq!(BlockType::Substitution.to_string(), "Substitution Block");
        assert_eq!(BlockType::Complex.to_string(), "Complex (Indel + Sub)");
        assert_eq!(BlockType::Deletion.to_string(), "Deletion");
    }

    #[test]
    fn perfect_match_has_no_blocks() {
        assert!(blocks(b"ACDEFG", b"ACDEFG").is_empty());
        assert!(blocks(b"", b"").is_empty());
    }

    #[test]
    fn separate_substitution_blocks() {
        let found = blocks(b"AIHV", b"VIHA");
        assert_eq!(found.len(), 2);
        assert_eq!((found[0].start, found[0].end), (1, 1));
        assert_eq!((found[1].start, found[1].end), (4, 4));
        for block in &found {
            assert_eq!(block.block_type, BlockType::Substitution);
            assert_eq!(block.substitutions.len(), 1);
            assert_eq!(block.substitutions[0].score, 0);
            assert_eq!(block.substitutions[0].class, SubstitutionClass::Neutral);
        }
        assert_eq!(found[1].substitutions[0].position, 4);
        assert_eq!(found[1].substitutions[0].from, b'V');
        assert_eq!(found[1].substitutions[0].to, b'A');
    }

    #[test]
    fn gaps_mixed_with_substitutions() {
        let found = blocks(b"AIHV", b"-V-I");
        assert_eq!(found.len(), 1);
        let block = &found[0];
        assert_eq!((block.start, block.end, block.len()), (1, 4, 4));
        assert_eq!(block.seq1, b"AIHV");
        assert_eq!(block.seq2, b"-V-I");
        assert_eq!(block.gaps_seq1, 0);
        assert_eq!(block.gaps_seq2, 2);
        assert_eq!(block.block_type, BlockType::Complex);
        let detail: Vec<(usize, u8, u8, i32)> = block
            .substitutions
            .iter()
            .map(|s| (s.position, s.from, s.to, s.score))
            .collect();
        assert_eq!(detail, vec![(2, b'I', b'V', 3), (4, b'V', b'I', 3)]);
        assert!(block
            .substitutions
            .iter()
            .all(|s| s.class == SubstitutionClass::Conservative));
    }

    #[test]
    fn gap_only_in_second_sequence_is_insertion() {
        let found = blocks(b"ACDEFGHIKL", b"ACDE----KL");
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].start, found[0].end), (5, 8));
        assert_eq!(found[0].block_type, BlockType::Insertion);
        assert!(!found[0].has_substitutions());
    }

    #[test]
    fn gap_only_in_first_sequence_is_deletion() {
        let found = blocks(b"KRDE--", b"KRDEGG");
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].start, found[0].end), (5, 6));
        assert_eq!(found[0].block_type, BlockType::Deletion);
        assert_eq!(found[0].gaps_seq1, 2);
    }

    #[test]
    fn gaps_on_both_sides_is_indel() {
        let found = blocks(b"-W", b"C-");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].block_type, BlockType::Indel);
        assert!(found[0].substitutions.is_empty());
    }

    #[test]
    fn mixed_alignment_produces_ordered_blocks() {
        let found = blocks(b"HEAGAWGHE-E", b"--P-AW-HEAE");
        let summary: Vec<(usize, usize, BlockType)> =
            found.iter().map(|b| (b.start, b.end, b.block_type)).collect();
        assert_eq!(
            summary,
            vec![
                (1, 4, BlockType::Complex),
                (7, 7, BlockType::Insertion),
                (10, 10, BlockType::Deletion),
            ]
        );
        let sub = found[0].substitutions[0];
        assert_eq!((sub.position, sub.from, sub.to, sub.score), (3, b'A', b'P', -1));
        assert_eq!(sub.class, SubstitutionClass::NonConservative);
    }

    #[test]
    fn non_conservative_substitution() {
        let found = blocks(b"ACDEFGHIKL", b"ACDWFGHIKL");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].block_type, BlockType::Substitution);
        assert_eq!(found[0].substitutions[0].score, -3);
        assert_eq!(found[0].substitutions[0].class, SubstitutionClass::NonConservative);
    }
}
