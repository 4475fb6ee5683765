//! Batch command implementation - align every pair listed in a file
//!
//! Each data line holds two sequences separated by whitespace. Blank lines and
//! lines starting with `#` are skipped.

use std::path::Path;

use anyhow::{bail, Context, Result};
use nw62_align::{align_batch, sanitize_sequence, Percent};
use nw62_core::Summarizable;

use crate::config::Config;
use crate::output::json_ok;

/// One pair read from a batch file, with its 1-based line number.
#[derive(Debug)]
struct PairLine {
    line_num: usize,
    seq1: Vec<u8>,
    seq2: Vec<u8>,
}

pub fn execute(config: &Config, path: &Path, gap_penalty: Option<&str>, json: bool) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;
    let pairs = parse_pairs(&content)
        .with_context(|| format!("Failed to parse batch file: {}", path.display()))?;
    let gap_penalty = config.gap_penalty(gap_penalty);

    log::info!("Aligning {} pair(s) from {} (gap penalty {})", pairs.len(), path.display(), gap_penalty);
    let refs: Vec<(&[u8], &[u8])> = pairs
        .iter()
        .map(|p| (p.seq1.as_slice(), p.seq2.as_slice()))
        .collect();
    let analyses = align_batch(&refs, gap_penalty)?;

    if json {
        return Ok(json_ok(&analyses));
    }
    if analyses.is_empty() {
        return Ok("No sequence pairs found\n".to_string());
    }
    let width = pairs.last().map_or(1, |p| p.line_num.to_string().len());
    Ok(pairs
        .iter()
        .zip(&analyses)
        .map(|(pair, analysis)| {
            format!(
                "{:>width$}: {}, {}% identity, {} variant block(s)\n",
                pair.line_num,
                analysis.alignment.summary(),
                Percent(analysis.stats.identity),
                analysis.variants.len()
            )
        })
        .collect())
}

fn parse_pairs(content: &str) -> Result<Vec<PairLine>> {
    let mut pairs = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 2 {
            bail!("line {line_num}: expected two sequences, found {} field(s)", fields.len());
        }
        let seq1 = sanitize_sequence(fields[0])
            .with_context(|| format!("line {line_num}: sequence 1 is not usable"))?;
        let seq2 = sanitize_sequence(fields[1])
            .with_context(|| format!("line {line_num}: sequence 2 is not usable"))?;
        pairs.push(PairLine { line_num, seq1, seq2 });
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_batch(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_pairs_and_skips_comments() {
        let pairs = parse_pairs("# reference variant\n\nAIHV VIHA\n  mkv\tmrv  \n").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].line_num, 3);
        assert_eq!(pairs[1].seq1, b"MKV");
        assert_eq!(pairs[1].seq2, b"MRV");
    }

    #[test]
    fn wrong_field_count_names_the_line() {
        let err = parse_pairs("AIHV VIHA\nMKV\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn unusable_sequence_names_the_line() {
        let err = parse_pairs("AIHV 123\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 1: sequence 2"));
    }

    #[test]
    fn text_lines_in_file_order() {
        let file = write_batch("AIHV VIHA\n# skipped\nMKV MRV\n");
        let out = execute(&Config::default(), file.path(), None, false).unwrap();
        assert_eq!(
            out,
            "1: AIHV vs VIHA: score 12 over 4 columns, 50.0% identity, 2 variant block(s)\n\
             3: MKV vs MRV: score 11 over 3 columns, 66.7% identity, 1 variant block(s)\n"
        );
    }

    #[test]
    fn json_uses_penalty_flag() {
        let file = write_batch("AIHV VIHA\n");
        let out = execute(&Config::default(), file.path(), Some("-8"), true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["ok"][0]["alignment"]["score"], 12);
        assert_eq!(v["ok"][0]["alignment"]["gap_penalty"], -8);
    }

    #[test]
    fn empty_file() {
        let file = write_batch("# nothing here\n");
        let out = execute(&Config::default(), file.path(), None, false).unwrap();
        assert_eq!(out, "No sequence pairs found\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(execute(&Config::default(), &dir.path().join("absent.txt"), None, false).is_err());
    }
}
