#![allow(dead_code)]

use std::path::Path;

use watchsvc::config::{ConfigFile, RawConfigFile, RuleConfig, StatusSection, WatchSection};

/// Builder for `ConfigFile` to simplify test setup.
///
/// `build()` goes through the same `TryFrom` validation as production
/// loading, so the watched root passed to `new` must exist (use `tempfile`).
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new(root: &Path) -> Self {
        Self {
            config: RawConfigFile {
                watch: WatchSection {
                    root: root.to_path_buf(),
                    debounce_ms: 2000,
                },
                ignore: Vec::new(),
                rules: Vec::new(),
                status: StatusSection::default(),
            },
        }
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.config.watch.debounce_ms = ms;
        self
    }

    pub fn with_rule(mut self, prefix: &str, service: Option<&str>) -> Self {
        self.config.rules.push(RuleConfig {
            prefix: prefix.to_string(),
            service: service.map(str::to_string),
        });
        self
    }

    pub fn with_ignore(mut self, substring: &str) -> Self {
        self.config.ignore.push(substring.to_string());
        self
    }

    pub fn with_status_service(mut self, service: &str) -> Self {
        self.config.status.services.push(service.to_string());
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}
