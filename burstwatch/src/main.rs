use burstwatch_core::cli::conf::{self, ConfigCmd};
use burstwatch_core::cli::scan::{ScanArgs, run_scan};
use burstwatch_core::logging::{LogFormat, default_log_format, init_logging_with};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "burstwatch",
    version,
    about = "Burstwatch: find IPs sending bursts of matching requests in web server access logs",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Format of diagnostics written to stderr
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(flatten)]
    scan: ScanArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan access logs and rank IPs by their busiest window (default)
    Scan(ScanArgs),

    /// Settings file tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let opts = Cli::parse();

    init_logging_with(opts.log_format.unwrap_or_else(default_log_format));

    let result = match opts.command {
        Some(Command::Scan(args)) => run_scan(&args),
        Some(Command::Config { cmd }) => conf::run(cmd),
        None => run_scan(&opts.scan),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
