//! Hot reload of the method table.
//!
//! A `notify` watcher reloads the file on every write and forwards configs
//! that load and validate; `apply_updates` swaps them into the shared
//! overrides. A config that fails to load never reaches the channel.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::loader::load_config;
use crate::config::schema::AutoLogConfig;
use crate::intercept::metadata::{MethodOverrides, SharedOverrides};

/// What a single reload attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reload {
    Forwarded,
    Rejected,
    Unheard,
}

/// Follows one config file and forwards each valid version of it.
pub struct ConfigWatcher {
    path: PathBuf,
    updates: mpsc::UnboundedSender<AutoLogConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and the receiving end of its updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<AutoLogConfig>) {
        let (updates, rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            updates,
        };
        (watcher, rx)
    }

    /// Start watching on notify's own thread.
    ///
    /// Dropping the returned watcher stops watching.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self { path, updates } = self;
        let watched = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    reload(&watched, &updates);
                }
                Ok(_) => {}
                Err(e) => tracing::error!(path = %watched.display(), error = %e, "Config watch failed"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = %path.display(), "Config watcher started");
        Ok(watcher)
    }
}

fn reload(path: &Path, updates: &mpsc::UnboundedSender<AutoLogConfig>) -> Reload {
    let config = match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "Config reload rejected, keeping current overrides"
            );
            return Reload::Rejected;
        }
    };

    let methods = config.methods.len();
    if updates.send(config).is_err() {
        tracing::warn!(
            path = %path.display(),
            methods,
            "Config reloaded but nothing is applying updates"
        );
        return Reload::Unheard;
    }

    tracing::info!(path = %path.display(), methods, "Config reloaded");
    Reload::Forwarded
}

/// Swap each received config's method table into `overrides`.
///
/// The task ends when the sending side is dropped.
pub fn apply_updates(
    mut updates: mpsc::UnboundedReceiver<AutoLogConfig>,
    overrides: SharedOverrides,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(config) = updates.recv().await {
            let next = MethodOverrides::from_config(&config);
            tracing::info!(methods = next.len(), "Method overrides reloaded");
            overrides.store(Arc::new(next));
        }
    })
}
