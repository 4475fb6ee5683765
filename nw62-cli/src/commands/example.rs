//! Example command implementation - run a built-in sequence pair

use anyhow::Result;

use crate::config::Config;
use crate::presets::Preset;
use crate::OutputArgs;

pub fn execute(config: &Config, preset: Preset, args: &OutputArgs) -> Result<String> {
    log::info!("Running example {:?}", preset);
    let (seq1, seq2) = preset.sequences();
    super::align::execute(config, &seq1, &seq2, args)
}
