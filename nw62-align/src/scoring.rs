//! Scoring for global protein alignment.
//!
//! Provides the fixed BLOSUM62 table over the 20 standard amino acids, the
//! linear [`GapPenalty`], the [`Scorer`] that the alignment and analysis passes
//! share, and the coarse [`SubstitutionClass`] of a pairwise score.

use core::fmt;
use core::str::FromStr;

use nw62_core::{Nw62Error, Result};

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// The 20 standard amino acids in matrix order.
pub const AMINO_ACIDS: [u8; AA_DIM] = *b"ARNDCQEGHILKMFPSTWYV";

/// Matrix dimension: 20 amino acid symbols.
pub const AA_DIM: usize = 20;

/// Maps an amino acid letter to a 0-based index in [`BLOSUM62`]. Case-insensitive.
///
/// Returns `None` for anything outside the 20-letter alphabet, including the
/// gap marker.
pub fn aa_to_index(aa: u8) -> Option<usize> {
    match aa.to_ascii_uppercase() {
        b'A' => Some(0),
        b'R' => Some(1),
        b'N' => Some(2),
        b'D' => Some(3),
        b'C' => Some(4),
        b'Q' => Some(5),
        b'E' => Some(6),
        b'G' => Some(7),
        b'H' => Some(8),
        b'I' => Some(9),
        b'L' => Some(10),
        b'K' => Some(11),
        b'M' => Some(12),
        b'F' => Some(13),
        b'P' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'W' => Some(17),
        b'Y' => Some(18),
        b'V' => Some(19),
        _ => None,
    }
}

/// Whether `aa` belongs to the 20-letter alphabet. Case-insensitive.
pub fn is_amino_acid(aa: u8) -> bool {
    aa_to_index(aa).is_some()
}

/// Raw BLOSUM62 lookup. `None` if either residue is outside the alphabet.
pub fn substitution_score(a: u8, b: u8) -> Option<i32> {
    match (aa_to_index(a), aa_to_index(b)) {
        (Some(i), Some(j)) => Some(BLOSUM62[i * AA_DIM + j]),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Gap penalty
// ---------------------------------------------------------------------------

/// Linear per-column gap penalty.
///
/// Conventionally negative or zero, but any integer is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GapPenalty(pub i32);

impl GapPenalty {
    /// The fallback penalty used when none (or garbage) is supplied.
    pub const DEFAULT: GapPenalty = GapPenalty(-4);

    /// The raw penalty value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Parse a user-supplied penalty, falling back to [`GapPenalty::DEFAULT`].
    ///
    /// Leading whitespace is skipped, then an optional sign and the leading run
    /// of decimal digits are read; anything after them is ignored, so `"-4.5"`
    /// parses as `-4` and `"7 gaps"` as `7`. Missing or non-numeric text never
    /// fails: it yields the default and logs a warning.
    pub fn parse_lenient(text: Option<&str>) -> Self {
        match text.and_then(leading_integer) {
            Some(value) => GapPenalty(value),
            None => {
                log::warn!(
                    "gap penalty {:?} is missing or not numeric, using default {}",
                    text.unwrap_or(""),
                    Self::DEFAULT
                );
                Self::DEFAULT
            }
        }
    }
}

impl Default for GapPenalty {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for GapPenalty {
    fn from(value: i32) -> Self {
        GapPenalty(value)
    }
}

impl fmt::Display for GapPenalty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GapPenalty {
    type Err = Nw62Error;

    /// Strict parse: the whole (trimmed) string must be an integer.
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i32>()
            .map(GapPenalty)
            .map_err(|e| Nw62Error::Parse(format!("invalid gap penalty {s:?}: {e}")))
    }
}

fn leading_integer(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

// ---------------------------------------------------------------------------
// Substitution classes
// ---------------------------------------------------------------------------

/// Minimum score of a [`SubstitutionClass::Conservative`] substitution.
pub const CONSERVATIVE_MIN_SCORE: i32 = 2;

/// Minimum score of a [`SubstitutionClass::Neutral`] substitution.
pub const NEUTRAL_MIN_SCORE: i32 = 0;

/// Coarse qualitative bucket of a substitution score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubstitutionClass {
    /// Score >= 2.
    Conservative,
    /// 0 <= score < 2.
    Neutral,
    /// Score < 0.
    NonConservative,
}

impl SubstitutionClass {
    /// Classify a pairwise substitution score.
    pub fn from_score(score: i32) -> Self {
        if score >= CONSERVATIVE_MIN_SCORE {
            SubstitutionClass::Conservative
        } else if score >= NEUTRAL_MIN_SCORE {
            SubstitutionClass::Neutral
        } else {
            SubstitutionClass::NonConservative
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SubstitutionClass::Conservative => "Conservative",
            SubstitutionClass::Neutral => "Neutral",
            SubstitutionClass::NonConservative => "Non-conservative",
        }
    }
}

impl fmt::Display for SubstitutionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// BLOSUM62 scoring with a linear gap penalty.
///
/// Holds no table of its own (the matrix is a process-wide constant), so one
/// value can be built per run and shared by reference between the alignment,
/// statistics, and variant passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scorer {
    gap_penalty: GapPenalty,
}

impl Scorer {
    /// Create a scorer with the given gap penalty.
    pub fn new(gap_penalty: impl Into<GapPenalty>) -> Self {
        Self {
            gap_penalty: gap_penalty.into(),
        }
    }

    /// Score of aligning `a` with `b`. Case-insensitive.
    ///
    /// If either symbol is outside the alphabet (the gap marker included) the
    /// gap penalty is returned instead of a matrix value, so `score(b'-', b'-')`
    /// and `score(b'X', b'A')` both equal the gap penalty.
    pub fn score(&self, a: u8, b: u8) -> i32 {
        substitution_score(a, b).unwrap_or(self.gap_penalty.0)
    }

    /// The per-column gap penalty.
    pub fn gap_penalty(&self) -> i32 {
        self.gap_penalty.0
    }

    /// Qualitative class of a substitution score.
    pub fn classify(&self, score: i32) -> SubstitutionClass {
        SubstitutionClass::from_score(score)
    }
}

// ===========================================================================
// NCBI BLOSUM62, restricted to the 20 standard residues
// Row/column order: A R N D C Q E G H I L K M F P S T W Y V
// ===========================================================================

/// BLOSUM62, 20x20 flattened, symmetric.
#[rustfmt::skip]
pub const BLOSUM62: [i32; AA_DIM * AA_DIM] = [
//   A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V
     4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0, // A
    -1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3, // R
    -2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3, // N
    -2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3, // D
     0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1, // C
    -1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2, // Q
    -1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2, // E
     0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3, // G
    -2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3, // H
    -1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3, // I
    -1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1, // L
    -1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2, // K
    -1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1, // M
    -2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1, // F
    -1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2, // P
     1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2, // S
     0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0, // T
    -3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3, // W
    -2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1, // Y
     0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4, // V
];
