// src/dispatch/debounce.rs

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Per-service restart debouncing.
///
/// Remembers when each service was last admitted for a restart and refuses
/// another one inside the configured window. This is what keeps an editor's
/// save-as-temp-then-rename burst (several events within milliseconds) from
/// turning into a restart storm.
///
/// Semantics:
/// - The skip is silent: no log, no subprocess call.
/// - The timestamp is recorded *before* the restart command is issued, so a
///   second event arriving while a restart is still in flight is debounced.
/// - State is per-service; different services never debounce each other.
///
/// The state is owned by one dispatcher instance and lives only as long as
/// it does. Nothing is persisted across runs.
#[derive(Debug)]
pub struct DebounceState {
    window: Duration,
    last_restart: HashMap<String, Instant>,
}

impl DebounceState {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_restart: HashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Check-and-record in one step.
    ///
    /// Returns `false` if the service was restarted less than `window` ago.
    /// Otherwise records `now` as the service's last restart and returns
    /// `true`.
    pub fn should_restart(&mut self, service: &str, now: Instant) -> bool {
        if let Some(last) = self.last_restart.get(service) {
            if now.duration_since(*last) < self.window {
                return false;
            }
        }

        self.last_restart.insert(service.to_string(), now);
        true
    }
}
