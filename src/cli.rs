use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "resumescore",
    version,
    about = "Score resumes against role keyword catalogs and online-presence signals"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use this config file instead of discovering layered config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume file or every .txt/.md resume under a directory
    Score(ScoreCommand),
    /// Print the links found in a resume
    Links(LinksCommand),
    /// List catalog roles and their keyword counts
    Roles,
    /// Print certification suggestions for a domain
    Certs(CertsCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(long, default_value = "")]
    pub role: String,
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long)]
    pub leetcode: Option<String>,
    /// Certification domain (analytical, technical, ...)
    #[arg(long)]
    pub domain: Option<String>,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
    /// Exit with code 2 when any weighted total falls below this
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub min_score: Option<u32>,
    /// Look up public GitHub/LeetCode counts (needs the `enrichment` feature)
    #[arg(long)]
    pub enrich: bool,
}

#[derive(Args)]
pub struct LinksCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct CertsCommand {
    pub domain: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Chart,
}
