//! The main path must not wait for the browser: a slow or gated opener
//! cannot hold up `Launcher::launch`.

use std::sync::mpsc;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tokio::runtime::{Builder, Handle};
use weblaunch::browser::{BrowserOpener, LaunchError};
use weblaunch::launcher::{LaunchOutcome, Launcher, TargetUrl};

/// Opener that blocks until the test releases it.
struct Gated {
    release: Mutex<mpsc::Receiver<()>>,
    seen: Mutex<Vec<String>>,
}

impl BrowserOpener for Gated {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        self.release.lock().unwrap().recv().ok();
        self.seen.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

struct Slow(Duration);

impl BrowserOpener for Slow {
    fn open(&self, _url: &str) -> Result<(), LaunchError> {
        std::thread::sleep(self.0);
        Ok(())
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn launch_returns_while_opener_is_blocked() {
    let (tx, rx) = mpsc::channel();
    let launcher = Launcher::new(Gated {
        release: Mutex::new(rx),
        seen: Mutex::new(Vec::new()),
    });

    let task = launcher.launch(&Handle::current(), TargetUrl::new("http://example.com"));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!task.is_finished());

    tx.send(()).unwrap();
    assert!(matches!(task.outcome().await, LaunchOutcome::Opened));
}

#[test]
fn launch_time_is_independent_of_opener_delay() {
    let runtime = Builder::new_current_thread().build().unwrap();
    let launcher = Launcher::new(Slow(Duration::from_secs(2)));

    let started = Instant::now();
    let task = launcher.launch(runtime.handle(), TargetUrl::default());
    let elapsed = started.elapsed();
    drop(task);

    assert!(elapsed < Duration::from_millis(500), "launch took {:?}", elapsed);
    // Teardown is bounded even though the opener is still sleeping.
    let started = Instant::now();
    runtime.shutdown_timeout(Duration::from_millis(100));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[test]
fn detached_launch_finishes_within_grace() {
    let runtime = Builder::new_current_thread().build().unwrap();
    let (tx, rx) = mpsc::channel();
    tx.send(()).unwrap();
    let launcher = Launcher::new(Gated {
        release: Mutex::new(rx),
        seen: Mutex::new(Vec::new()),
    });

    drop(launcher.launch(runtime.handle(), TargetUrl::new("")));
    runtime.shutdown_timeout(Duration::from_secs(5));

    // The empty string reaches the opener untouched.
    let seen = launcher.opener().seen.lock().unwrap().clone();
    assert_eq!(seen, vec![String::new()]);
}
