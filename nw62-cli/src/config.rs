//! Configuration handling for the nw62 CLI
//!
//! Loads `nw62.toml` when present; command-line flags override file values.

use anyhow::{Context, Result};
use nw62_align::{GapPenalty, DEFAULT_HISTORY_CAPACITY, DEFAULT_LINE_WIDTH};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "nw62.toml";

/// History file used when the config does not name one.
pub const DEFAULT_HISTORY_FILE: &str = "nw62-history.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Gap penalty text, parsed leniently (`"-6"`, `"-4.5"`, `"7x"` all work).
    #[serde(default, deserialize_with = "number_or_string")]
    pub gap_penalty: Option<String>,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Where saved comparisons are stored
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Maximum number of saved comparisons
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Alignment columns per printed block
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_capacity() -> usize { DEFAULT_HISTORY_CAPACITY }
fn default_line_width() -> usize { DEFAULT_LINE_WIDTH }

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            capacity: default_capacity(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
        }
    }
}

/// Accept `gap_penalty = -6` as well as `gap_penalty = "-6"`.
fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Int(i64),
        Float(f64),
        Str(String),
    }

    Ok(Option::<NumberOrString>::deserialize(deserializer)?.map(|v| match v {
        NumberOrString::Int(n) => n.to_string(),
        NumberOrString::Float(x) => x.to_string(),
        NumberOrString::Str(s) => s,
    }))
}

impl Config {
    /// Load from `config_path`, else `./nw62.toml` if it exists, else defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {DEFAULT_CONFIG_FILE}");
                    Self::load_from_file(&default_path)
                } else {
                    log::debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Effective gap penalty: the flag if given, else the file value, else the default.
    pub fn gap_penalty(&self, flag: Option<&str>) -> GapPenalty {
        GapPenalty::parse_lenient(flag.or(self.gap_penalty.as_deref()))
    }

    /// Effective block width: the flag if given, else the file value.
    pub fn line_width(&self, flag: Option<usize>) -> usize {
        flag.unwrap_or(self.render.line_width).max(1)
    }

    pub fn history_path(&self) -> PathBuf {
        self.history
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.gap_penalty(None), GapPenalty(-4));
        assert_eq!(config.line_width(None), 60);
        assert_eq!(config.history.capacity, 20);
        assert_eq!(config.history_path(), PathBuf::from(DEFAULT_HISTORY_FILE));
    }

    #[test]
    fn loads_all_sections() {
        let file = write_config(
            r#"
gap_penalty = "-8"

[history]
path = "/tmp/nw62/history.json"
capacity = 5

[render]
line_width = 40
"#,
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.gap_penalty(None), GapPenalty(-8));
        assert_eq!(config.history.capacity, 5);
        assert_eq!(config.history_path(), PathBuf::from("/tmp/nw62/history.json"));
        assert_eq!(config.line_width(None), 40);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("[render]\nline_width = 80\n");
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.line_width(None), 80);
        assert_eq!(config.history.capacity, DEFAULT_HISTORY_CAPACITY);
        assert_eq!(config.gap_penalty(None), GapPenalty::DEFAULT);
    }

    #[test]
    fn gap_penalty_as_number_or_text() {
        let file = write_config("gap_penalty = -6\n");
        assert_eq!(Config::load_from_file(file.path()).unwrap().gap_penalty(None), GapPenalty(-6));

        let file = write_config("gap_penalty = \"-4.5\"\n");
        assert_eq!(Config::load_from_file(file.path()).unwrap().gap_penalty(None), GapPenalty(-4));

        let file = write_config("gap_penalty = \"zero\"\n");
        assert_eq!(Config::load_from_file(file.path()).unwrap().gap_penalty(None), GapPenalty(-4));
    }

    #[test]
    fn flags_override_file() {
        let file = write_config("gap_penalty = \"-8\"\n[render]\nline_width = 40\n");
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.gap_penalty(Some("-2")), GapPenalty(-2));
        assert_eq!(config.gap_penalty(Some("0")), GapPenalty(0));
        assert_eq!(config.line_width(Some(10)), 10);
        assert_eq!(config.line_width(Some(0)), 1);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Config::load(Some(missing.as_path())).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("[history\ncapacity = ");
        assert!(Config::load_from_file(file.path()).is_err());
    }
}
