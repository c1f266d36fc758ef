// src/watch/watcher.rs

use std::path::PathBuf;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::dispatch::{ChangeEvent, DispatchEvent};
use crate::errors::Result;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle stops file watching, which is
/// how shutdown tears the subscription down.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher that observes the given `root` directory
/// recursively and forwards modified/created paths into the dispatcher's
/// event channel.
///
/// The raw `notify` callback runs on notify's own thread; it only pushes
/// events into an unbounded channel. An async forwarding task then filters
/// event kinds, stamps the directory flag, and emits
/// [`DispatchEvent::FileChanged`].
pub fn spawn_watcher(
    root: impl Into<PathBuf>,
    events_tx: mpsc::Sender<DispatchEvent>,
) -> Result<WatcherHandle> {
    let root = root.into();
    let root = root.canonicalize().unwrap_or_else(|_| root.clone()); // best-effort

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel::<Event>();

    // Closure called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    if let Err(err) = event_tx.send(event) {
                        // We can't log via tracing here easily, so fallback to stderr.
                        eprintln!("watchsvc: failed to forward notify event: {err}");
                    }
                }
                Err(err) => {
                    eprintln!("watchsvc: file watch error: {err}");
                }
            }
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::Recursive)?;

    info!("file watcher started on {:?}", root);

    // Async task that consumes notify events and forwards them to the
    // dispatcher runtime.
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!("received notify event: {:?}", event);

            if !is_change_kind(&event.kind) {
                continue;
            }

            for path in event.paths {
                let is_dir = path.is_dir();
                let change = ChangeEvent { path, is_dir };

                if let Err(err) = events_tx.send(DispatchEvent::FileChanged(change)).await {
                    warn!("failed to send DispatchEvent::FileChanged: {err}");
                    // If the runtime channel is closed, there's no point
                    // keeping the watcher loop alive.
                    return;
                }
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// The notification source only deals in modifications and creations;
/// removals, renames-away and access events never lead to a restart.
fn is_change_kind(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}
