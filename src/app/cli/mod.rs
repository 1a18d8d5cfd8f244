//! CLI Adapter.

mod exec;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PREXEC_LOG";

#[derive(Parser)]
#[command(name = "prexec")]
#[command(version)]
#[command(
    about = "Run a command against a pull request or commit and comment the result on GitHub",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command and post its result as a comment
    #[clap(visible_alias = "e")]
    Exec(exec::ExecArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Exec(args) => exec::run_exec(args),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr so stdout stays with the command output and dry-run comment.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
