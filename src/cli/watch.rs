//! Watch command - regenerate on route file changes.
//!
//! Watches the configured routes directory with a debounce window so a
//! burst of edits triggers one recompilation. A compilation failure is
//! logged and watching continues; the next change gets a fresh run.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use notify::{EventKind, RecursiveMode, Watcher};

use crate::cli::WatchArgs;
use crate::config::Config;
use crate::source::ArtisanSource;
use crate::{debug, log};

/// Set by the Ctrl+C handler; checked every poll tick.
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Poll interval for the event channel.
const TICK: Duration = Duration::from_millis(100);

pub fn run(config: &Config, args: &WatchArgs) -> Result<()> {
    ctrlc::set_handler(|| SHUTDOWN.store(true, Ordering::SeqCst))
        .context("Failed to set Ctrl+C handler")?;

    let debounce = Duration::from_millis(args.debounce.unwrap_or(config.watch.debounce_ms));
    let routes_dir = config.routes_dir();

    // Initial compilation; failures here should not kill the watcher
    regenerate(config);

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = tx.send(res);
    })
    .context("Failed to create file watcher")?;

    watcher
        .watch(&routes_dir, RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {}", routes_dir.display()))?;

    log!("watch"; "watching {} (Ctrl+C to stop)", routes_dir.display());

    let mut pending = false;
    let mut last_event = Instant::now();

    loop {
        if SHUTDOWN.load(Ordering::SeqCst) {
            log!("watch"; "stopped");
            return Ok(());
        }

        match rx.recv_timeout(TICK) {
            Ok(Ok(event)) => {
                if is_relevant(&event) {
                    debug!("watch"; "change: {:?}", event.paths);
                    pending = true;
                    last_event = Instant::now();
                }
            }
            Ok(Err(e)) => log!("watch"; "notify error: {}", e),
            Err(RecvTimeoutError::Timeout) => {
                if pending && last_event.elapsed() >= debounce {
                    pending = false;
                    regenerate(config);
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                log!("watch"; "watcher channel closed");
                return Ok(());
            }
        }
    }
}

/// Only content changes matter; access events would cause rebuild loops.
fn is_relevant(event: &notify::Event) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| is_route_file(p))
}

/// Route definitions are PHP files; editor swap/backup files are noise.
fn is_route_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "php")
}

/// One compilation pass; errors are logged, not propagated.
fn regenerate(config: &Config) {
    let source = ArtisanSource::new(config);
    if let Err(e) = super::generate::generate(config, &source, false, true) {
        log!("error"; "{:#}", e);
    }
}

// ============================================================================
// Tests
// ============================================================================
