use clap::Parser;
use std::path::PathBuf;

/// Replays recorded entity state updates and checks that each one agrees with
/// the dead-reckoning prediction made from the update before it.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// A scenario TOML file, or a directory searched recursively for them.
    #[arg(short, long, default_value = "assets/scenarios")]
    pub scenario: PathBuf,

    /// Stop replaying a scenario at its first mismatched update.
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}
