use fixity_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // File logging is best-effort; fall back to stderr (e.g. read-only home).
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("fixity error: {:#}", err);
        std::process::exit(1);
    }
}
