//! Config file watching
//!
//! Uses the `notify` crate with debouncing to notice edits to
//! `config.yaml` so the grid can restart with the new settings.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use notify_debouncer_mini::{new_debouncer, DebouncedEvent, DebouncedEventKind, Debouncer};

/// Watches one config file
///
/// The parent directory is watched instead of the file itself so that the
/// file may be created later, or replaced by editors that write a new file
/// and rename it over the old one.
pub struct ConfigWatcher {
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<Result<Vec<DebouncedEvent>, notify::Error>>,
    path: PathBuf,
}

impl ConfigWatcher {
    pub fn new(path: PathBuf) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut debouncer = new_debouncer(Duration::from_millis(250), tx)?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        std::fs::create_dir_all(&dir).map_err(notify::Error::io)?;
        debouncer
            .watcher()
            .watch(&dir, notify::RecursiveMode::NonRecursive)?;

        tracing::info!("Watching config file {}", path.display());

        Ok(Self {
            _debouncer: debouncer,
            rx,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the config file changed since the last poll (non-blocking)
    pub fn poll_changed(&self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(events) => {
                    changed |= events.iter().any(|event| self.is_config_event(event));
                }
                Err(e) => {
                    tracing::warn!("Config watcher error: {:?}", e);
                }
            }
        }
        if changed {
            tracing::debug!("Config file {} changed", self.path.display());
        }
        changed
    }

    fn is_config_event(&self, event: &DebouncedEvent) -> bool {
        if event.kind == DebouncedEventKind::AnyContinuous {
            return false;
        }
        is_same_file(&event.path, &self.path)
    }
}

/// Compare paths as the watcher reports them, tolerating relative config paths
fn is_same_file(reported: &Path, config: &Path) -> bool {
    if reported == config {
        return true;
    }
    match (reported.canonicalize(), config.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        // File was just removed; fall back to comparing names
        _ => reported.file_name().is_some() && reported.file_name() == config.file_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_is_same_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = dir.path().join("config.yaml");
        std::fs::write(&config, "speed: 1\n").unwrap();

        assert!(is_same_file(&config, &config));
        assert!(!is_same_file(&dir.path().join("other.yaml"), &config));
    }

    #[test]
    fn test_poll_without_changes() {
        let dir = tempdir().expect("Failed to create temp dir");
        let watcher = ConfigWatcher::new(dir.path().join("config.yaml"));

        if watcher.is_err() {
            return; // Skip if watcher can't be created
        }
        let watcher = watcher.unwrap();
        assert!(!watcher.poll_changed());
        assert!(watcher.path().ends_with("config.yaml"));
    }
}
