// src/lib.rs

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod logging;
pub mod svc;
pub mod watch;

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigFile;
use crate::dispatch::{CoreDispatcher, DispatchEvent, Runtime};
use crate::svc::{ServiceManager, Systemctl};
use crate::watch::spawn_watcher;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the startup service-status report
/// - dispatcher core / runtime
/// - file watcher
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    info!(
        root = ?cfg.watch.root,
        debounce_ms = cfg.watch.debounce_ms,
        rules = cfg.rules.len(),
        "watchsvc starting"
    );

    // Startup self-check: report each known service's state. Informational
    // only, never gating.
    let mut manager = Systemctl::new();
    report_service_status(&mut manager, &cfg.status.services).await;

    // Dispatcher event channel.
    let (events_tx, events_rx) = mpsc::channel::<DispatchEvent>(64);

    // File watcher; the handle keeps the subscription alive until run()
    // returns, and dropping it stops watching.
    let _watcher_handle = spawn_watcher(cfg.watch.root.clone(), events_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = events_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(DispatchEvent::ShutdownRequested).await;
        });
    }

    let core = CoreDispatcher::from_config(&cfg);
    let runtime = Runtime::new(core, events_rx, manager);
    runtime.run().await?;

    info!("watcher stopped");
    Ok(())
}

/// Query and log the up/down state of each configured service.
///
/// Query failures (e.g. the manager binary missing) are logged and skipped;
/// startup continues regardless.
pub async fn report_service_status<M: ServiceManager>(manager: &mut M, services: &[String]) {
    for service in services {
        match manager.is_active(service).await {
            Ok(status) => {
                let up = status == "active";
                info!(service = %service, status = %status, up, "service status");
            }
            Err(err) => {
                warn!(service = %service, error = %err, "could not query service status");
            }
        }
    }
}

/// Simple dry-run output: print the watched root, rules and ignore set.
fn print_dry_run(cfg: &ConfigFile) {
    println!("watchsvc dry-run");
    println!("  watch.root = {:?}", cfg.watch.root);
    println!("  watch.debounce_ms = {}", cfg.watch.debounce_ms);
    println!();

    println!("rules ({}):", cfg.rules.len());
    for rule in &cfg.rules {
        match &rule.service {
            Some(service) => println!("  - {} -> restart {}", rule.prefix, service),
            None => println!("  - {} -> no restart", rule.prefix),
        }
    }

    if !cfg.ignore.is_empty() {
        println!();
        println!("ignored substrings ({}):", cfg.ignore.len());
        for pat in &cfg.ignore {
            println!("  - {pat}");
        }
    }

    if !cfg.status.services.is_empty() {
        println!();
        println!("status services: {:?}", cfg.status.services);
    }

    debug!("dry-run complete (no watching)");
}
