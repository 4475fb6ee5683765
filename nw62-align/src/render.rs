//! Plain-text rendering of alignments and variant blocks.
//!
//! Both renderers are [`fmt::Display`] adaptors, so they can be written
//! straight to a terminal or collected with `to_string()`.

use core::fmt;

use crate::scoring::Scorer;
use crate::types::{AlignmentResult, GAP};
use crate::variants::VariantBlock;

/// Columns per rendered alignment block.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Match-line symbol for one column.
///
/// `|` identical residues, `:` differing residues with a positive score,
/// `.` differing residues scoring zero or less, space for any gap column.
pub fn match_symbol(a: u8, b: u8, scorer: &Scorer) -> char {
    if a == GAP || b == GAP {
        ' '
    } else if a == b {
        '|'
    } else if scorer.score(a, b) > 0 {
        ':'
    } else {
        '.'
    }
}

/// The match line for an aligned pair.
pub fn match_line(aligned_seq1: &[u8], aligned_seq2: &[u8], scorer: &Scorer) -> String {
    aligned_seq1
        .iter()
        .zip(aligned_seq2)
        .map(|(&a, &b)| match_symbol(a, b, scorer))
        .collect()
}

/// An alignment wrapped into fixed-width blocks with residue numbering.
///
/// Each block is three lines: sequence 1, the match line, sequence 2. The
/// numbers left and right of a sequence row are the 1-based positions of its
/// first and last residue in the block; gaps are not counted.
pub struct WrappedAlignment<'a> {
    result: &'a AlignmentResult,
    scorer: &'a Scorer,
    width: usize,
}

impl<'a> WrappedAlignment<'a> {
    pub fn new(result: &'a AlignmentResult, scorer: &'a Scorer, width: usize) -> Self {
        Self {
            result,
            scorer,
            width: width.max(1),
        }
    }
}

impl fmt::Display for WrappedAlignment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let longest = self.result.seq1.len().max(self.result.seq2.len()).max(1);
        let pad = longest.to_string().len();

        let mut pos1 = 0;
        let mut pos2 = 0;

        let chunks1 = self.result.aligned_seq1.chunks(self.width);
        let chunks2 = self.result.aligned_seq2.chunks(self.width);

        for (n, (chunk1, chunk2)) in chunks1.zip(chunks2).enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            let end1 = pos1 + residues(chunk1);
            let end2 = pos2 + residues(chunk2);

            writeln!(f, "{:>pad$} {} {}", pos1 + 1, String::from_utf8_lossy(chunk1), end1)?;
            writeln!(f, "{:>pad$} {}", "", match_line(chunk1, chunk2, self.scorer))?;
            writeln!(f, "{:>pad$} {} {}", pos2 + 1, String::from_utf8_lossy(chunk2), end2)?;

            pos1 = end1;
            pos2 = end2;
        }
        Ok(())
    }
}

fn residues(chunk: &[u8]) -> usize {
    chunk.iter().filter(|&&c| c != GAP).count()
}

/// Render `result` in blocks of `width` columns.
pub fn render_alignment(result: &AlignmentResult, scorer: &Scorer, width: usize) -> String {
    WrappedAlignment::new(result, scorer, width).to_string()
}

/// A text table of variant blocks with per-substitution detail lines.
pub struct VariantTable<'a>(pub &'a [VariantBlock]);

impl fmt::Display for VariantTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks = self.0;
        if blocks.is_empty() {
            return writeln!(f, "Perfect match - no variants");
        }

        let spans: Vec<String> = blocks.iter().map(|b| format!("{}-{}", b.start, b.end)).collect();
        let pw = spans.iter().map(String::len).max().unwrap_or(0).max("Positions".len());
        let sw = blocks.iter().map(VariantBlock::len).max().unwrap_or(0).max("Seq1".len());

        writeln!(f, "{:<pw$}  {:<sw$}  {:<sw$}  {:>3}  Type", "Positions", "Seq1", "Seq2", "Len")?;
        for (block, span) in blocks.iter().zip(&spans) {
            writeln!(
                f,
                "{:<pw$}  {:<sw$}  {:<sw$}  {:>3}  {}",
                span,
                String::from_utf8_lossy(&block.seq1),
                String::from_utf8_lossy(&block.seq2),
                block.len(),
                block.block_type
            )?;
            if block.has_substitutions() {
                for sub in &block.substitutions {
                    writeln!(
                        f,
                        "    {}  {} -> {}  score {}  {}",
                        sub.position, sub.from as char, sub.to as char, sub.score, sub.class
                    )?;
                }
            } else {
                writeln!(f, "    pure indel, no substitutions")?;
            }
        }
        Ok(())
    }
}

/// Render a variant block list as a text table.
pub fn render_variants(blocks: &[VariantBlock]) -> String {
    VariantTable(blocks).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::needleman_wunsch::needleman_wunsch;
    use crate::variants::variant_blocks;

    #[test]
    fn match_symbols() {
        let scorer = Scorer::default();
        assert_eq!(match_symbol(b'A', b'A', &scorer), '|');
        assert_eq!(match_symbol(b'I', b'V', &scorer), ':');
        assert_eq!(match_symbol(b'A', b'V', &scorer), '.');
        assert_eq!(match_symbol(b'E', b'W', &scorer), '.');
        assert_eq!(match_symbol(b'A', b'-', &scorer), ' ');
        assert_eq!(match_symbol(b'-', b'-', &scorer), ' ');
    }

    #[test]
    fn single_block_rendering() {
        let scorer = Scorer::default();
        let result = needleman_wunsch(b"AIHV", b"VI", &scorer);
        let text = render_alignment(&result, &scorer, DEFAULT_LINE_WIDTH);
        assert_eq!(text, "1 AIHV 4\n   : :\n1 -V-I 2\n");
    }

    #[test]
    fn wraps_at_width() {
        let scorer = Scorer::default();
        let result = needleman_wunsch(b"ACDEF", b"ACDEF", &scorer);
        let text = render_alignment(&result, &scorer, 2);
        assert_eq!(
            text,
            "1 AC 2\n  ||\n1 AC 2\n\n3 DE 4\n  ||\n3 DE 4\n\n5 F 5\n  |\n5 F 5\n"
        );
    }

    #[test]
    fn all_gap_block_keeps_numbering() {
        let scorer = Scorer::default();
        let result = needleman_wunsch(b"ACDEFGHIKL", b"ACDEKL", &scorer);
        // ACDEFGHIKL / ACDE----KL in blocks of 4
        let text = render_alignment(&result, &scorer, 4);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 1 ACDE 4");
        assert_eq!(lines[2], " 1 ACDE 4");
        assert_eq!(lines[4], " 5 FGHI 8");
        assert_eq!(lines[6], " 5 ---- 4");
        assert_eq!(lines[8], " 9 KL 10");
        assert_eq!(lines[10], " 5 KL 6");
    }

    #[test]
    fn variant_table_lists_blocks_and_details() {
        let scorer = Scorer::default();
        let blocks = variant_blocks(b"AIHV", b"-V-I", &scorer);
        let text = render_variants(&blocks);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Positions  Seq1  Seq2  Len  Type");
        assert_eq!(lines[1], "1-4        AIHV  -V-I    4  Complex (Indel + Sub)");
        assert_eq!(lines[2], "    2  I -> V  score 3  Conservative");
        assert_eq!(lines[3], "    4  V -> I  score 3  Conservative");
    }

    #[test]
    fn variant_table_pure_indel() {
        let blocks = variant_blocks(b"KRDE--", b"KRDEGG", &Scorer::default());
        let text = render_variants(&blocks);
        assert!(text.contains("Deletion"));
        assert!(text.contains("pure indel, no substitutions"));
    }

    #[test]
    fn variant_table_perfect_match() {
        assert_eq!(render_variants(&[]), "Perfect match - no variants\n");
    }
}
