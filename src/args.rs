use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "Padel ELO Processor",
    long_about = "Rebuilds the club ELO ladder from an exported match history"
)]
pub struct Args {
    /// Exported matches table: a JSON array of match rows, in any order
    /// (the replay sorts by created_at).
    #[arg(short, long, env = "MATCHES_PATH", help = "Matches export file")]
    pub matches: PathBuf,

    /// Exported profiles table. Without it, players seen in match rows are
    /// still rated but rendered without display names.
    #[arg(short, long, env = "PROFILES_PATH", help = "Profiles export file")]
    pub profiles: Option<PathBuf>,

    /// Where to write the standings JSON; prints to stdout when omitted.
    #[arg(short, long, help = "Standings output file")]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
