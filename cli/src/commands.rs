pub mod describe;
pub mod info;
pub mod report;

use caja_common::money::Amount;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "caja")]
#[command(about = "A sales tallying tool.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output: -q drops the chrome, -qq leaves raw output only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Quote the raw total for on-site sales, as the historical reports did
    #[arg(long, global = true)]
    pub legacy_onsite: bool,

    /// Maximum number of summary lines in a report
    #[arg(long, default_value_t = 64, global = true)]
    pub limit: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about this tool
    #[command(alias = "i")]
    Info,
    /// Summarize a single sale
    #[command(alias = "d")]
    Describe {
        total: Amount,
        /// Tax component contained in the total
        #[arg(long)]
        tax: Option<Amount>,
    },
    /// Tally one or more sales into a report
    #[command(alias = "r")]
    Report {
        /// Sale entries as TOTAL[:TAX[@CHANNEL]], comma- or space-separated
        #[arg(required = true)]
        entries: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
