mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a settings file and exit
    Check {
        /// Path to the settings file
        #[arg(default_value = "burstwatch.hcl")]
        path: PathBuf,

        /// Print without colors
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print resolved settings as JSON
    Dump {
        /// Path to the settings file; defaults only when omitted
        path: Option<PathBuf>,
    },

    /// Write a commented settings file
    Init {
        /// Path to the settings file
        #[arg(default_value = "burstwatch.hcl")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
        ConfigCmd::Dump { path } => dump(path),
        ConfigCmd::Init { path } => init(path),
    }
}
