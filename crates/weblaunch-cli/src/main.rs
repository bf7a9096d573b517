use std::process::ExitCode;
use weblaunch::logging;

mod cli;

fn main() -> ExitCode {
    // Initialize logging as early as possible; a broken state dir must not stop the launch.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    cli::run_from_args()
}
