// src/dispatch/core.rs

//! Pure core of the change dispatcher.
//!
//! This module contains a synchronous, deterministic core that consumes
//! [`DispatchEvent`]s and produces a list of "commands" describing what the
//! IO shell should do next (announce a changed path, restart a service).
//!
//! The async/IO-heavy shell (`dispatch::runtime::Runtime`) is responsible
//! for:
//! - reading events from the channel
//! - invoking the service manager
//! - handling Ctrl+C / shutdown
//!
//! The core is intended to be extensively tested without any Tokio,
//! channels, filesystem, or processes. Time enters only through the `now`
//! parameter, so debounce behaviour is testable with synthetic instants.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::model::ConfigFile;
use crate::dispatch::debounce::DebounceState;
use crate::watch::path_utils::relative_str;
use crate::watch::rules::{Classification, RuleSet};

/// A normalised filesystem change, as delivered by the watcher.
///
/// The watcher has already reduced raw notification kinds to
/// modified/created; the directory flag is carried so the core can discard
/// directory-only events without touching the filesystem.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Events sent into the dispatcher from the watcher or external signals.
#[derive(Debug, Clone)]
pub enum DispatchEvent {
    FileChanged(ChangeEvent),
    ShutdownRequested,
}

/// What the IO shell should do in response to one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchCommand {
    /// Emit the human-readable changed-path notice. Always precedes any
    /// restart command for the same event.
    AnnounceChange { rel_path: String },
    /// Invoke the service manager's restart for this service.
    RestartService { service: String },
}

/// Result of feeding one event into the core.
#[derive(Debug, Clone)]
pub struct DispatchStep {
    pub commands: Vec<DispatchCommand>,
    pub keep_running: bool,
}

impl DispatchStep {
    /// Convenience for tests and callers that only care about restarts.
    pub fn restarts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DispatchCommand::RestartService { service } => Some(service.as_str()),
            DispatchCommand::AnnounceChange { .. } => None,
        })
    }
}

/// Pure dispatcher state.
///
/// Owns the watched root, the classification table and the debounce state.
/// It has **no** channels, no Tokio types, and performs no IO; several
/// independent dispatchers can coexist (tests rely on this).
#[derive(Debug)]
pub struct CoreDispatcher {
    root: PathBuf,
    rules: RuleSet,
    debounce: DebounceState,
}

impl CoreDispatcher {
    pub fn new(root: impl Into<PathBuf>, rules: RuleSet, debounce_window: Duration) -> Self {
        Self {
            root: root.into(),
            rules,
            debounce: DebounceState::new(debounce_window),
        }
    }

    /// Build a dispatcher straight from a validated config.
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self::new(
            cfg.watch.root.clone(),
            RuleSet::from_config(cfg),
            Duration::from_millis(cfg.watch.debounce_ms),
        )
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Handle a single event, updating core state and returning the
    /// resulting commands for the IO shell.
    pub fn step(&mut self, event: DispatchEvent, now: Instant) -> DispatchStep {
        match event {
            DispatchEvent::FileChanged(change) => DispatchStep {
                commands: self.handle_file_changed(&change, now),
                keep_running: true,
            },
            DispatchEvent::ShutdownRequested => DispatchStep {
                commands: Vec::new(),
                keep_running: false,
            },
        }
    }

    fn handle_file_changed(&mut self, change: &ChangeEvent, now: Instant) -> Vec<DispatchCommand> {
        // Directory events never classify; restarts are driven by files.
        if change.is_dir {
            return Vec::new();
        }

        // A path outside the watched root cannot be relativised; treat it
        // as no match rather than an error.
        let Some(rel_path) = relative_str(&self.root, &change.path) else {
            return Vec::new();
        };

        match self.rules.classify(&rel_path) {
            Classification::Service(service) => {
                // The changed-path notice always comes first; only the
                // restart itself is subject to debouncing.
                let mut commands = vec![DispatchCommand::AnnounceChange { rel_path }];
                if self.debounce.should_restart(&service, now) {
                    commands.push(DispatchCommand::RestartService { service });
                }
                commands
            }
            Classification::Suppressed | Classification::NoMatch => Vec::new(),
        }
    }
}
