// src/dispatch/mod.rs

//! The change dispatcher.
//!
//! This module ties together:
//! - the pure dispatch core (directory guard, classification, debounce)
//! - the per-service debounce state
//! - the main runtime event loop that reacts to:
//!   - file-change events from the watcher
//!   - shutdown signals
//!
//! Control flow: filesystem notification → ignore filter → path-to-service
//! classification → debounce check → restart invocation → status report.

pub mod core;
pub mod debounce;
pub mod runtime;

pub use core::{ChangeEvent, CoreDispatcher, DispatchCommand, DispatchEvent, DispatchStep};
pub use debounce::DebounceState;
pub use runtime::Runtime;
