//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

use crate::config::StrategyKind;

/// Sort JSON rows and print them as a text table.
#[derive(Debug, Parser)]
#[command(name = "advtable", version, about)]
pub struct Args {
    /// JSON file holding an array of row objects (`-` reads stdin)
    pub rows: PathBuf,

    /// Table config file (defaults to `table.json` in the config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sorting strategy, overriding the config file
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Activate the header of the column with this sort key; repeat to click again
    #[arg(short, long = "activate", value_name = "KEY")]
    pub activate: Vec<String>,

    /// Keep the last row (totals) in place while sorting
    #[arg(long)]
    pub pin_last_row: bool,

    /// Current page address for the url strategy
    #[arg(long, value_name = "URL")]
    pub location: Option<String>,

    /// Log file (defaults to `advtable.log` in the cache directory)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: LevelFilter,
}
