//! CLI for the weblaunch helper.

mod launch;

use clap::Parser;
use std::process::ExitCode;

/// Open a URL in the default web browser without blocking the caller.
#[derive(Debug, Parser)]
#[command(name = "weblaunch")]
#[command(about = "Open a URL in the default web browser without blocking the caller", long_about = None)]
pub struct Cli {
    /// The URL to open in web browser.
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Extra positional arguments (e.g. a document path the host appends); ignored.
    #[arg(hide = true, value_name = "ARGS")]
    pub rest: Vec<String>,
}

/// Parse the process arguments and fire off the launch.
///
/// Clap handles malformed arguments itself (usage on stderr, exit code 2).
/// Every path after a successful parse exits 0.
pub fn run_from_args() -> ExitCode {
    let cli = Cli::parse();
    launch::run(cli)
}
