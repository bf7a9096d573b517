//! Launcher: capture the target URL and hand it to a detached blocking worker
//! that asks the default browser to show it.
//!
//! The caller gets a [`LaunchTask`] back immediately. Dropping it detaches the
//! work; nothing about the outcome ever flows back to the main path.

use crate::browser::{BrowserOpener, LaunchError};
use crate::locale::Catalog;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// URL opened when neither `--url` nor a configured default is given.
pub const DEFAULT_URL: &str = "http://www.inkscape.org/";

/// The URL to show, captured once at startup. Any string is accepted,
/// including the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl(String);

impl TargetUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Pick the URL from the command-line flag, else the configured default,
    /// else [`DEFAULT_URL`]. An explicit empty flag value is kept as-is.
    pub fn resolve(flag: Option<String>, configured_default: Option<&str>) -> Self {
        match flag {
            Some(url) => Self(url),
            None => Self::new(configured_default.unwrap_or(DEFAULT_URL)),
        }
    }

    /// Pass the URL through the message catalog for the current locale.
    pub fn localized(self, catalog: &Catalog) -> Self {
        let translated = catalog.translate(&self.0).into_owned();
        Self(translated)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetUrl {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What happened to a launch, as seen from inside the worker.
#[derive(Debug)]
pub enum LaunchOutcome {
    /// The platform accepted the request.
    Opened,
    /// The platform reported an error.
    Failed(LaunchError),
    /// The opener panicked; the panic was contained in the worker.
    Panicked,
    /// The worker never ran: the runtime was already shut down when the
    /// launch was submitted.
    Aborted,
}

/// Handle to a launch in flight. Drop it to detach.
#[derive(Debug)]
pub struct LaunchTask {
    handle: JoinHandle<LaunchOutcome>,
}

impl LaunchTask {
    /// Wait for the worker. The binary never calls this; tests and callers
    /// that want diagnostics may.
    pub async fn outcome(self) -> LaunchOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_panic() => LaunchOutcome::Panicked,
            Err(_) => LaunchOutcome::Aborted,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns fire-and-forget browser launches through an opener.
#[derive(Debug)]
pub struct Launcher<O> {
    opener: Arc<O>,
}

impl<O> Clone for Launcher<O> {
    fn clone(&self) -> Self {
        Self {
            opener: Arc::clone(&self.opener),
        }
    }
}

impl<O: BrowserOpener> Launcher<O> {
    pub fn new(opener: O) -> Self {
        Self {
            opener: Arc::new(opener),
        }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Start the browser launch on the runtime's blocking pool and return at once.
    pub fn launch(&self, runtime: &Handle, url: TargetUrl) -> LaunchTask {
        let opener = Arc::clone(&self.opener);
        tracing::debug!(url = %url, "spawning detached browser launch");
        let handle = runtime.spawn_blocking(move || open_contained(opener.as_ref(), &url));
        LaunchTask { handle }
    }
}

/// Run the opener, keeping errors and panics inside the worker.
fn open_contained<O: BrowserOpener>(opener: &O, url: &TargetUrl) -> LaunchOutcome {
    match panic::catch_unwind(AssertUnwindSafe(|| opener.open(url.as_str()))) {
        Ok(Ok(())) => {
            tracing::info!(url = %url, "browser launch requested");
            LaunchOutcome::Opened
        }
        Ok(Err(err)) => {
            tracing::warn!(url = %url, error = %err, "browser launch failed");
            LaunchOutcome::Failed(err)
        }
        Err(_) => {
            tracing::warn!(url = %url, "browser opener panicked");
            LaunchOutcome::Panicked
        }
    }
}
