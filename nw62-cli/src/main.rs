use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

mod commands;
mod config;
mod history_store;
mod output;
mod presets;

use config::Config;
use presets::Preset;

#[derive(Parser)]
#[command(name = "nw62")]
#[command(about = "Global protein alignment with BLOSUM62 and variant analysis")]
#[command(version)]
#[command(long_about = "
nw62 aligns two protein sequences end to end (Needleman-Wunsch, BLOSUM62,
linear gap penalty), reports identity, similarity and gap statistics, and
lists the variant blocks where the sequences differ.

Examples:
  nw62 align MKVLAAGIV MKVLSAGV
  nw62 align --gap-penalty -6 AIHV -- -V-I
  nw62 example spike --json
  nw62 batch pairs.txt --gap-penalty -8
  nw62 history
  nw62 history --rerun 1
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two protein sequences
    Align {
        /// First sequence (case-insensitive; non-residue characters are ignored)
        seq1: String,

        /// Second sequence (put `--` before a sequence that starts with a gap)
        seq2: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Align a built-in example pair
    Example {
        /// Example name
        preset: Preset,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Align every sequence pair listed in a file, one pair per line
    Batch {
        /// File with two whitespace-separated sequences per line; `#` starts a comment line
        file: PathBuf,

        /// Gap penalty; the leading integer is used, anything unparseable falls back to -4
        #[arg(short, long, allow_hyphen_values = true)]
        gap_penalty: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List, replay, or clear saved comparisons
    History(HistoryArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct HistoryArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,

    /// Remove every saved comparison
    #[arg(long, conflicts_with = "rerun")]
    pub clear: bool,

    /// Align saved comparison N again (1 is the most recent, as listed)
    #[arg(long, value_name = "N")]
    pub rerun: Option<usize>,

    /// Alignment columns per printed block when replaying
    #[arg(short, long, requires = "rerun")]
    pub width: Option<usize>,
}

/// Options shared by the commands that run an alignment.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Gap penalty; the leading integer is used, anything unparseable falls back to -4
    #[arg(short, long, allow_hyphen_values = true)]
    pub gap_penalty: Option<String>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,

    /// Append the comparison to the history file
    #[arg(long)]
    pub save: bool,

    /// Alignment columns per printed block
    #[arg(short, long)]
    pub width: Option<usize>,
}

impl Commands {
    fn wants_json(&self) -> bool {
        match self {
            Commands::Align { output, .. } | Commands::Example { output, .. } => output.json,
            Commands::Batch { json, .. } => *json,
            Commands::History(args) => args.json,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .init();
}

fn run(config: &Config, command: &Commands) -> Result<String> {
    match command {
        Commands::Align { seq1, seq2, output } => commands::align::execute(config, seq1, seq2, output),
        Commands::Example { preset, output } => commands::example::execute(config, *preset, output),
        Commands::Batch { file, gap_penalty, json } => {
            commands::batch::execute(config, file, gap_penalty.as_deref(), *json)
        }
        Commands::History(args) => commands::history::execute(config, args),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let json = cli.command.wants_json();
    let result = Config::load(cli.config.as_deref()).and_then(|config| run(&config, &cli.command));

    match result {
        Ok(text) => {
            print!("{text}");
            if json {
                println!();
            }
            Ok(())
        }
        Err(e) if json => {
            log::error!("{e:#}");
            println!("{}", output::json_err(format!("{e:#}")));
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}
