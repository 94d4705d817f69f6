use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Name of the job to run, as declared in treesync.yaml
    pub job: String,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Directory holding treesync.yaml; job paths resolve against it
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// Report what a sync would change without touching the target
    #[clap(long)]
    pub dry_run: bool,
}
