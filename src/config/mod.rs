// src/config/mod.rs

//! Configuration loading and validation for watchsvc.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like the watched root existing (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigFile, RawConfigFile, RuleConfig, StatusSection, WatchSection};
pub use validate::validate_config;
