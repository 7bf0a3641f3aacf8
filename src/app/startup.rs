//! Binary entry wiring: parse arguments, initialise logging, run the task

use std::process::ExitCode;

use clap::Parser;

use crate::app::cli::Args;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::version;
use crate::task;

pub fn startup() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_logging(args.log_level.as_deref(), args.log_file.as_deref()) {
        eprintln!("Could not initialise logging: {}", err);
        return ExitCode::FAILURE;
    }
    log::debug!(
        "revision-info {} ({}) built {}",
        env!("CARGO_PKG_VERSION"),
        version::git_hash(),
        version::build_time()
    );

    let config = args.into_config();
    match task::execute(&config) {
        Ok(outcome) => {
            if outcome.properties_file.is_none() && !outcome.warnings.is_empty() {
                // extraction failed outright; mirror the accumulated errors
                // on stderr and report failure, as the standalone original did
                eprintln!("{}", outcome.warnings);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            log_error_with_context(&err, "revision-info task");
            ExitCode::FAILURE
        }
    }
}
