// src/config/validate.rs

use crate::config::model::RawConfigFile;
use crate::errors::{Result, WatchsvcError};

/// Run semantic validation against a loaded configuration.
///
/// This checks:
/// - the watched root exists and is a directory
/// - there is at least one `[[rule]]`
/// - no rule has an empty prefix or an empty service name
/// - no ignore substring is empty
/// - no status service name is empty
///
/// A failure here is fatal at startup: the process reports the error and
/// exits before any watching begins.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_watch_root(cfg)?;
    ensure_has_rules(cfg)?;
    validate_rules(cfg)?;
    validate_ignore(cfg)?;
    validate_status(cfg)?;
    Ok(())
}

fn validate_watch_root(cfg: &RawConfigFile) -> Result<()> {
    let root = &cfg.watch.root;
    if !root.is_dir() {
        return Err(WatchsvcError::ConfigError(format!(
            "[watch].root {:?} does not exist or is not a directory",
            root
        )));
    }
    Ok(())
}

fn ensure_has_rules(cfg: &RawConfigFile) -> Result<()> {
    if cfg.rules.is_empty() {
        return Err(WatchsvcError::ConfigError(
            "config must contain at least one [[rule]] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_rules(cfg: &RawConfigFile) -> Result<()> {
    for (idx, rule) in cfg.rules.iter().enumerate() {
        if rule.prefix.is_empty() {
            return Err(WatchsvcError::ConfigError(format!(
                "[[rule]] #{} has an empty prefix",
                idx + 1
            )));
        }
        if let Some(service) = &rule.service {
            if service.is_empty() {
                return Err(WatchsvcError::ConfigError(format!(
                    "[[rule]] #{} ({:?}) has an empty service name; omit `service` \
                     instead to suppress restarts",
                    idx + 1,
                    rule.prefix
                )));
            }
        }
    }
    Ok(())
}

fn validate_ignore(cfg: &RawConfigFile) -> Result<()> {
    if cfg.ignore.iter().any(|s| s.is_empty()) {
        return Err(WatchsvcError::ConfigError(
            "`ignore` entries must be non-empty substrings".to_string(),
        ));
    }
    Ok(())
}

fn validate_status(cfg: &RawConfigFile) -> Result<()> {
    if cfg.status.services.iter().any(|s| s.is_empty()) {
        return Err(WatchsvcError::ConfigError(
            "[status].services entries must be non-empty".to_string(),
        ));
    }
    Ok(())
}
