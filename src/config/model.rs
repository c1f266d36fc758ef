// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::{Result, WatchsvcError};

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// ignore = ["node_modules", ".git", ".log"]
///
/// [watch]
/// root = "/srv/livestream"
/// debounce_ms = 2000
///
/// [[rule]]
/// prefix = "frontend/"
/// service = "livestream"
///
/// [[rule]]
/// prefix = "tools/"
/// # no service: changes here are recognised but never restart anything
///
/// [status]
/// services = ["livestream"]
/// ```
///
/// Rule order in the file is significant: the first matching rule wins.
/// `toml` preserves array-of-tables order, so `rules` is scanned as written.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// `[watch]` section: the watched root and the debounce window.
    pub watch: WatchSection,

    /// Substrings that disqualify a changed path entirely.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Ordered service rules from `[[rule]]`.
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleConfig>,

    /// `[status]` section: services to report on at startup.
    #[serde(default)]
    pub status: StatusSection,
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchSection {
    /// Directory to watch recursively. All rule prefixes are evaluated
    /// against paths relative to this root.
    pub root: PathBuf,

    /// Minimum interval between two restarts of the same service.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    2000
}

/// A single `[[rule]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    /// Path prefix relative to `watch.root`, e.g. `"frontend/"` or a plain
    /// file name like `"server.js"`.
    pub prefix: String,

    /// Service to restart when the prefix matches.
    ///
    /// `None` means "recognised, but deliberately no restart" — distinct
    /// from a path that no rule matches at all.
    #[serde(default)]
    pub service: Option<String>,
}

/// `[status]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StatusSection {
    /// Services whose up/down state is reported once at startup.
    #[serde(default)]
    pub services: Vec<String>,
}

/// Validated configuration.
///
/// Same shape as [`RawConfigFile`]; constructing it via `TryFrom` is the
/// only path, so holding a `ConfigFile` implies validation has passed.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub watch: WatchSection,
    pub ignore: Vec<String>,
    pub rules: Vec<RuleConfig>,
    pub status: StatusSection,
}

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = WatchsvcError;

    fn try_from(raw: RawConfigFile) -> Result<Self> {
        crate::config::validate::validate_config(&raw)?;
        Ok(Self {
            watch: raw.watch,
            ignore: raw.ignore,
            rules: raw.rules,
            status: raw.status,
        })
    }
}
