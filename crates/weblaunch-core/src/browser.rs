//! The platform "open URL in default browser" facility, behind a trait so the
//! launcher can be driven by a fake in tests.

use std::io;
use thiserror::Error;

/// Error returned when the platform refuses or fails to open a URL.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The default-browser facility reported an error (no browser, no display, ...).
    #[error("failed to open {url:?} in default browser: {source}")]
    Browser {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Something that can ask the desktop to show a URL.
///
/// Implementations run on a blocking worker, so they are free to block.
pub trait BrowserOpener: Send + Sync + 'static {
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Opener backed by the user's registered default browser.
///
/// On Unix the `BROWSER` environment variable is honored before the desktop
/// handler (`xdg-open` and friends).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        webbrowser::open(url).map_err(|source| LaunchError::Browser {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_error_display_names_url() {
        let err = LaunchError::Browser {
            url: "http://example.com".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no browser"),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"http://example.com\""));
        assert!(msg.contains("no browser"));
    }

    #[test]
    fn launch_error_exposes_source() {
        use std::error::Error as _;
        let err = LaunchError::Browser {
            url: String::new(),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        assert!(err.source().is_some());
    }
}
