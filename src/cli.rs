use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agriadvisor",
    version,
    about = "Season- and weather-aware crop advice for Rwandan districts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List known districts
    Districts {
        /// Only districts in this region (North, South, East, West, Central)
        #[arg(short, long)]
        region: Option<String>,
    },
    /// Print the advisory for one district
    Advise {
        /// District name, e.g. "Musanze"
        district: String,

        /// Calendar month to classify the season for (default: current month)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the agricultural season for a month
    Season {
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// List all three seasons
        #[arg(long, conflicts_with = "month")]
        all: bool,
    },
    /// Run interactive setup
    Init,
    /// Validate config and test the weather provider
    Check,
}
