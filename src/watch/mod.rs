// src/watch/mod.rs

//! File watching and change classification.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`).
//! - Turning changed paths into strings relative to the watched root.
//! - Classifying relative paths against the ignore set and the ordered
//!   service rule table.
//!
//! It does **not** know how services are restarted; it only decides which
//! service (if any) a changed path belongs to.

pub mod path_utils;
pub mod rules;
pub mod watcher;

pub use path_utils::relative_str;
pub use rules::{Classification, RuleSet, ServiceRule};
pub use watcher::{WatcherHandle, spawn_watcher};
