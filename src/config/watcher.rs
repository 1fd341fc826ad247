//! Manifest file watcher for hot reload.
//!
//! Only a manifest that loads, validates and differs from the last one
//! delivered is forwarded.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::RouteManifest;

/// Monitors a route manifest and emits every changed version that loads and
/// validates.
pub struct ManifestWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<RouteManifest>,
}

impl ManifestWatcher {
    /// Returns the watcher and a receiver for manifest updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<RouteManifest>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. Dropping the returned watcher stops notifications.
    ///
    /// The manifest on disk when watching starts is the baseline; rewriting
    /// it with equal content emits nothing.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();
        let mut changes = ManifestChanges::new(load_config(&path).ok());

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    match load_config(&path) {
                        Ok(manifest) => match changes.admit(manifest) {
                            Some(manifest) => {
                                tracing::info!(
                                    path = %path.display(),
                                    groups = manifest.groups.len(),
                                    "Route manifest changed, reloading"
                                );
                                if tx.send(manifest).is_err() {
                                    tracing::debug!("Manifest receiver dropped");
                                }
                            }
                            None => {
                                tracing::debug!(path = %path.display(), "Route manifest unchanged");
                            }
                        },
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to reload manifest, keeping current routes");
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = %self.path.display(), "Manifest watcher started");
        Ok(watcher)
    }
}

/// Remembers the last manifest delivered.
#[derive(Debug, Default)]
struct ManifestChanges {
    last: Option<RouteManifest>,
}

impl ManifestChanges {
    fn new(baseline: Option<RouteManifest>) -> Self {
        Self { last: baseline }
    }

    /// Returns `manifest` if it differs from the last one admitted.
    fn admit(&mut self, manifest: RouteManifest) -> Option<RouteManifest> {
        if self.last.as_ref() == Some(&manifest) {
            return None;
        }
        self.last = Some(manifest.clone());
        Some(manifest)
    }
}
