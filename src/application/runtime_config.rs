use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub job: String,
    pub root: PathBuf,
    pub dry_run: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            job: cli.job,
            root: cli.root,
            dry_run: cli.dry_run,
        }
    }
}
