// src/watch/rules.rs

use crate::config::model::ConfigFile;

/// Outcome of classifying a changed path.
///
/// `Suppressed` covers two distinct situations that end the same way:
/// the path hit an ignore substring, or it matched a rule that has no
/// service attached. `NoMatch` means no rule recognised the path at all.
/// None of these are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Service(String),
    Suppressed,
    NoMatch,
}

/// A single ordered mapping entry: path prefix -> service.
///
/// `service = None` marks a prefix that is recognised but must never cause
/// a restart (e.g. a `tools/` directory full of one-off scripts).
#[derive(Debug, Clone)]
pub struct ServiceRule {
    prefix: String,
    service: Option<String>,
}

impl ServiceRule {
    pub fn new(prefix: impl Into<String>, service: Option<String>) -> Self {
        Self {
            prefix: prefix.into(),
            service,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Whether this rule applies to the given root-relative path.
    ///
    /// Matching is segment-boundary aware: the prefix (with any trailing
    /// `/` stripped) must equal the path exactly, or be followed by `/` in
    /// the path. `frontend/` therefore matches `frontend/index.html` but
    /// not `frontend-old/index.html`, and a plain file rule like
    /// `server.js` matches only that exact path.
    pub fn matches(&self, rel_path: &str) -> bool {
        let stem = self.prefix.trim_end_matches('/');
        if stem.is_empty() {
            return false;
        }
        match rel_path.strip_prefix(stem) {
            Some("") => true,
            Some(rest) => rest.starts_with('/'),
            None => false,
        }
    }
}

/// The complete classification table: ignore substrings plus the ordered
/// service rules.
///
/// Classification is pure string work over root-relative paths with forward
/// slashes; relativisation against the watched root happens upstream in
/// [`crate::watch::path_utils`].
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    ignore: Vec<String>,
    rules: Vec<ServiceRule>,
}

impl RuleSet {
    pub fn new(ignore: Vec<String>, rules: Vec<ServiceRule>) -> Self {
        Self { ignore, rules }
    }

    /// Build the rule set straight from a validated config.
    pub fn from_config(cfg: &ConfigFile) -> Self {
        let rules = cfg
            .rules
            .iter()
            .map(|r| ServiceRule::new(r.prefix.clone(), r.service.clone()))
            .collect();
        Self::new(cfg.ignore.clone(), rules)
    }

    /// Classify a root-relative path.
    ///
    /// The ignore filter runs first: a path containing any ignore substring
    /// is suppressed even if a service rule would have matched it. After
    /// that, rules are scanned in declaration order and the first match
    /// decides the outcome.
    pub fn classify(&self, rel_path: &str) -> Classification {
        if self.is_ignored(rel_path) {
            return Classification::Suppressed;
        }

        for rule in &self.rules {
            if rule.matches(rel_path) {
                return match rule.service() {
                    Some(service) => Classification::Service(service.to_string()),
                    None => Classification::Suppressed,
                };
            }
        }

        Classification::NoMatch
    }

    fn is_ignored(&self, rel_path: &str) -> bool {
        self.ignore.iter().any(|pat| rel_path.contains(pat.as_str()))
    }
}
