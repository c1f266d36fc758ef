// tests/config_loading.rs

use std::error::Error;
use std::fs;
use std::time::Instant;

use tempfile::TempDir;

use watchsvc::config::load_and_validate;
use watchsvc::dispatch::{ChangeEvent, CoreDispatcher, DispatchEvent};
use watchsvc::errors::WatchsvcError;
use watchsvc_test_utils::builders::ConfigFileBuilder;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("Watchsvc.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn full_config_parses_with_rule_order_preserved() -> TestResult {
    let dir = TempDir::new()?;
    let root = dir.path().join("app");
    fs::create_dir(&root)?;

    let config_path = write_config(
        &dir,
        &format!(
            r#"
ignore = ["node_modules", ".git"]

[watch]
root = {root:?}
debounce_ms = 1500

[[rule]]
prefix = "animation-server/"
service = "animation"

[[rule]]
prefix = "frontend/"
service = "livestream"

[[rule]]
prefix = "tools/"

[status]
services = ["animation", "livestream"]
"#
        ),
    );

    let cfg = load_and_validate(&config_path)?;

    assert_eq!(cfg.watch.root, root);
    assert_eq!(cfg.watch.debounce_ms, 1500);
    assert_eq!(cfg.ignore, vec!["node_modules", ".git"]);

    let prefixes: Vec<&str> = cfg.rules.iter().map(|r| r.prefix.as_str()).collect();
    assert_eq!(prefixes, vec!["animation-server/", "frontend/", "tools/"]);
    assert_eq!(cfg.rules[2].service, None);

    assert_eq!(cfg.status.services, vec!["animation", "livestream"]);

    Ok(())
}

#[test]
fn debounce_defaults_to_two_seconds() -> TestResult {
    let dir = TempDir::new()?;
    let root = dir.path().join("app");
    fs::create_dir(&root)?;

    let config_path = write_config(
        &dir,
        &format!(
            r#"
[watch]
root = {root:?}

[[rule]]
prefix = "frontend/"
service = "livestream"
"#
        ),
    );

    let cfg = load_and_validate(&config_path)?;
    assert_eq!(cfg.watch.debounce_ms, 2000);

    Ok(())
}

#[test]
fn missing_watch_root_is_a_fatal_config_error() -> TestResult {
    let dir = TempDir::new()?;

    let config_path = write_config(
        &dir,
        r#"
[watch]
root = "/nonexistent/watchsvc-test-root"

[[rule]]
prefix = "frontend/"
service = "livestream"
"#,
    );

    let err = load_and_validate(&config_path).unwrap_err();
    assert!(matches!(err, WatchsvcError::ConfigError(_)));

    Ok(())
}

#[test]
fn config_without_rules_is_rejected() -> TestResult {
    let dir = TempDir::new()?;
    let root = dir.path().join("app");
    fs::create_dir(&root)?;

    let config_path = write_config(
        &dir,
        &format!(
            r#"
[watch]
root = {root:?}
"#
        ),
    );

    let err = load_and_validate(&config_path).unwrap_err();
    assert!(matches!(err, WatchsvcError::ConfigError(_)));

    Ok(())
}

#[test]
fn empty_rule_prefix_is_rejected() -> TestResult {
    let dir = TempDir::new()?;
    let root = dir.path().join("app");
    fs::create_dir(&root)?;

    let config_path = write_config(
        &dir,
        &format!(
            r#"
[watch]
root = {root:?}

[[rule]]
prefix = ""
service = "livestream"
"#
        ),
    );

    let err = load_and_validate(&config_path).unwrap_err();
    assert!(matches!(err, WatchsvcError::ConfigError(_)));

    Ok(())
}

#[test]
fn unreadable_config_path_reports_io_error() -> TestResult {
    let dir = TempDir::new()?;
    let missing = dir.path().join("nope.toml");

    let err = load_and_validate(&missing).unwrap_err();
    assert!(matches!(err, WatchsvcError::IoError(_)));

    Ok(())
}

#[test]
fn dispatcher_built_from_config_classifies_real_paths() -> TestResult {
    let dir = TempDir::new()?;
    let root = dir.path().join("app");
    fs::create_dir(&root)?;

    let cfg = ConfigFileBuilder::new(&root)
        .with_debounce_ms(100)
        .with_rule("frontend/", Some("livestream"))
        .with_rule("tools/", None)
        .with_ignore("node_modules")
        .build();

    let mut core = CoreDispatcher::from_config(&cfg);

    let step = core.step(
        DispatchEvent::FileChanged(ChangeEvent {
            path: root.join("frontend/index.html"),
            is_dir: false,
        }),
        Instant::now(),
    );

    assert_eq!(step.restarts().collect::<Vec<_>>(), vec!["livestream"]);

    Ok(())
}
