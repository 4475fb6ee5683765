//! Core types for alignment results.

use std::borrow::Cow;

use nw62_core::{preview, Summarizable};

use crate::scoring::GapPenalty;

/// The gap marker used in aligned sequences.
pub const GAP: u8 = b'-';

/// How the two characters of one alignment column relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnKind {
    /// Both characters are equal (a gap-vs-gap column also lands here).
    Identical,
    /// Both are residues and they differ.
    Substitution,
    /// Gap in sequence 1 against a residue in sequence 2.
    GapInSeq1,
    /// Residue in sequence 1 against a gap in sequence 2.
    GapInSeq2,
}

impl ColumnKind {
    /// Classify one column.
    pub fn of(a: u8, b: u8) -> Self {
        if a == b {
            ColumnKind::Identical
        } else if a == GAP {
            ColumnKind::GapInSeq1
        } else if b == GAP {
            ColumnKind::GapInSeq2
        } else {
            ColumnKind::Substitution
        }
    }
}

/// The result of one global alignment run.
///
/// Immutable once produced; derived statistics and variant blocks are computed
/// from it by separate passes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentResult {
    /// Optimal global alignment score.
    pub score: i64,
    /// Aligned sequence 1 (with `-` for gaps).
    #[cfg_attr(feature = "serde", serde(with = "residue_string"))]
    pub aligned_seq1: Vec<u8>,
    /// Aligned sequence 2 (with `-` for gaps), same length as `aligned_seq1`.
    #[cfg_attr(feature = "serde", serde(with = "residue_string"))]
    pub aligned_seq2: Vec<u8>,
    /// Original ungapped sequence 1.
    #[cfg_attr(feature = "serde", serde(with = "residue_string"))]
    pub seq1: Vec<u8>,
    /// Original ungapped sequence 2.
    #[cfg_attr(feature = "serde", serde(with = "residue_string"))]
    pub seq2: Vec<u8>,
    /// Gap penalty the alignment was computed with.
    pub gap_penalty: GapPenalty,
}

impl AlignmentResult {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    /// Whether the alignment has no columns (both inputs empty).
    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }

    /// Iterate over `(seq1, seq2)` character pairs, column by column.
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.aligned_seq1
            .iter()
            .copied()
            .zip(self.aligned_seq2.iter().copied())
    }

    /// Aligned sequence 1 as text.
    pub fn aligned_seq1_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.aligned_seq1)
    }

    /// Aligned sequence 2 as text.
    pub fn aligned_seq2_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.aligned_seq2)
    }
}

/// Serialize residue rows as strings, for use with `#[serde(with = "residue_string")]`.
#[cfg(feature = "serde")]
pub mod residue_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(seq: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(seq))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        if !s.is_ascii() {
            return Err(D::Error::custom(format!("non-ASCII residue row: {s}")));
        }
        Ok(s.into_bytes())
    }
}

/// Serialize a single residue as a one-character string.
#[cfg(feature = "serde")]
pub mod residue_char {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(residue: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&char::from(*residue))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(D::Error::custom(format!("expected one ASCII residue, got {s:?}"))),
        }
    }
}

impl Summarizable for AlignmentResult {
    fn summary(&self) -> String {
        format!(
            "{} vs {}: score {} over {} columns",
            preview(&String::from_utf8_lossy(&self.seq1), 20),
            preview(&String::from_utf8_lossy(&self.seq2), 20),
            self.score,
            self.len()
        )
    }
}
