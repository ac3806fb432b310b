//! Background option loading
//!
//! Reads a file or stdin source on its own thread so the picker can draw
//! before the list arrives. With a watch interval the file's modification
//! time is polled and the whole list is sent again when it changes.

use std::fs;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, SystemTime};

use super::reader::{OptionReader, OptionSource};

/// Shortest mtime polling interval
pub const MIN_WATCH_INTERVAL: Duration = Duration::from_millis(10);

/// A full option list, or the reason it could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogUpdate {
    Loaded(Vec<String>),
    Failed(String),
}

impl CatalogUpdate {
    fn from_source(source: &OptionSource) -> Self {
        match OptionReader::read(source) {
            Ok(options) => CatalogUpdate::Loaded(options),
            Err(e) => CatalogUpdate::Failed(e.to_string()),
        }
    }
}

/// Spawn the loader thread and return the receiving end
///
/// `watch` only applies to file sources and is raised to at least
/// `MIN_WATCH_INTERVAL`. The thread exits once the receiver is gone.
pub fn spawn_loader(source: OptionSource, watch: Option<Duration>) -> Receiver<CatalogUpdate> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        loader_loop(source, watch, tx);
    });

    rx
}

fn poll_interval(watch: Duration) -> Duration {
    watch.max(MIN_WATCH_INTERVAL)
}

fn loader_loop(source: OptionSource, watch: Option<Duration>, tx: Sender<CatalogUpdate>) {
    let mut last_modified = match &source {
        OptionSource::File(path) => modified(path),
        _ => None,
    };

    if tx.send(CatalogUpdate::from_source(&source)).is_err() {
        return;
    }

    let (OptionSource::File(path), Some(interval)) = (&source, watch) else {
        log::debug!("Option loader finished");
        return;
    };

    let interval = poll_interval(interval);
    log::debug!("Watching {} every {:?}", path.display(), interval);
    loop {
        thread::sleep(interval);

        let current = modified(path);
        if current == last_modified {
            continue;
        }
        last_modified = current;

        log::debug!("{} changed, reloading options", path.display());
        if tx.send(CatalogUpdate::from_source(&source)).is_err() {
            break;
        }
    }

    log::debug!("Option watcher shutting down");
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
