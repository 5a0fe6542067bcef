use std::path::PathBuf;

use clap::Parser;

const ABOUT: &str = r#"🀄️📊 Derive per-round outcomes and per-seat statistics from Mahjong Soul (Jantama) paifu logs.

Basic usage:
  $ paifu-stats --pretty 240101-0d5f5c3e-8a1b-4c2d-9e0f-1a2b3c4d5e6f.json
  $ paifu-stats -o stats.jsonl ./paifu"#;

#[derive(Debug, Parser)]
#[clap(version, about = ABOUT)]
pub struct Options {
    /// Paifu JSON files or directories to read. Every ".json" file directly
    /// inside a directory is read in name order. If INPUT is "-", read from
    /// stdin.
    #[clap(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Directory of paifu JSON files to read when no INPUT is given. If
    /// neither is given, read from stdin.
    #[clap(short, long, value_name = "DIR", env = "PAIFU_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[clap(flatten, next_help_heading = "Output Options")]
    pub output_opts: OutputOptions,

    /// Do not guess the match ID from the file name for logs that do not
    /// carry one. Such matches are reported as "unknown".
    #[clap(long)]
    pub no_fallback_id: bool,

    /// Print verbose logs, including the parse notes of every match.
    #[clap(short, long)]
    pub verbose: bool,
}

#[derive(Debug, clap::Args)]
pub struct OutputOptions {
    /// The name of the JSON file to output. If FILE is "-" or empty, write to
    /// stdout. When there is more than one input, one match is written per
    /// line.
    #[clap(short, long, value_name = "FILE")]
    pub out_file: Option<PathBuf>,

    /// Pretty-print the output, which only takes effect with a single input.
    #[clap(long)]
    pub pretty: bool,
}
