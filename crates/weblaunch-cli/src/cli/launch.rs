//! Resolve the target URL and hand it to a detached browser launch.

use super::Cli;
use anyhow::{Context, Result};
use std::process::ExitCode;
use tokio::runtime::{Builder, Runtime};
use weblaunch::browser::{BrowserOpener, SystemBrowser};
use weblaunch::config::{self, LauncherConfig};
use weblaunch::launcher::{Launcher, TargetUrl};
use weblaunch::locale::Catalog;

pub(super) fn run(cli: Cli) -> ExitCode {
    if !cli.rest.is_empty() {
        tracing::debug!(ignored = ?cli.rest, "ignoring positional arguments");
    }
    let cfg = config::load().unwrap_or_else(|err| {
        tracing::warn!("ignoring config: {:#}", err);
        LauncherConfig::default()
    });
    tracing::debug!("loaded config: {:?}", cfg);
    let catalog = Catalog::from_env(cfg.translations.clone());

    launch_with(SystemBrowser, &cfg, &catalog, cli.url)
}

fn runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .thread_name("weblaunch-worker")
        .build()
        .context("building launch runtime")
}

/// Spawn the browser launch and return without waiting on it.
///
/// Process teardown lets the worker finish for at most `exit_grace_secs`.
/// The launch outcome never affects the exit code.
pub fn launch_with<O: BrowserOpener>(
    opener: O,
    cfg: &LauncherConfig,
    catalog: &Catalog,
    url_flag: Option<String>,
) -> ExitCode {
    let url = TargetUrl::resolve(url_flag, cfg.default_url.as_deref()).localized(catalog);

    let runtime = match runtime() {
        Ok(rt) => rt,
        Err(err) => {
            tracing::warn!("browser launch skipped: {:#}", err);
            return ExitCode::SUCCESS;
        }
    };

    tracing::info!(url = %url, "opening in default browser");
    let launcher = Launcher::new(opener);
    drop(launcher.launch(runtime.handle(), url));

    runtime.shutdown_timeout(cfg.exit_grace());
    ExitCode::SUCCESS
}
