// src/dispatch/runtime.rs

use std::fmt;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::dispatch::core::{CoreDispatcher, DispatchCommand, DispatchEvent};
use crate::errors::Result;
use crate::svc::ServiceManager;

/// Drives the change dispatcher in response to `DispatchEvent`s, and
/// delegates actual restarts to a `ServiceManager`.
///
/// This is a pure IO shell around [`CoreDispatcher`], which contains all the
/// dispatch semantics. This struct handles async IO: reading events from the
/// channel and invoking the service manager.
///
/// The single consumer loop is what serialises every read-modify-write of
/// the debounce state: two near-simultaneous events for the same service are
/// handled one after the other, and only the first passes the debounce
/// check. Restarts are awaited in-line, so events queue up behind a running
/// restart rather than racing it.
pub struct Runtime<M: ServiceManager> {
    core: CoreDispatcher,
    events_rx: mpsc::Receiver<DispatchEvent>,
    manager: M,
}

impl<M: ServiceManager> fmt::Debug for Runtime<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<M: ServiceManager> Runtime<M> {
    pub fn new(core: CoreDispatcher, events_rx: mpsc::Receiver<DispatchEvent>, manager: M) -> Self {
        Self {
            core,
            events_rx,
            manager,
        }
    }

    /// Main event loop.
    ///
    /// - Consumes `DispatchEvent`s from `events_rx`.
    /// - Feeds them into the pure core.
    /// - Executes commands returned by the core (announce, restart).
    /// - Stops on shutdown or when the channel closes.
    pub async fn run(mut self) -> Result<()> {
        info!("watchsvc dispatcher started");

        loop {
            let event = match self.events_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("dispatcher event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "dispatcher received event");

            let step = self.core.step(event, Instant::now());

            for command in step.commands {
                self.execute_command(command).await;
            }

            if !step.keep_running {
                info!("shutdown requested, stopping dispatcher");
                break;
            }
        }

        info!("dispatcher exiting");
        Ok(())
    }

    /// Execute a single command from the core.
    async fn execute_command(&mut self, command: DispatchCommand) {
        match command {
            DispatchCommand::AnnounceChange { rel_path } => {
                info!(path = %rel_path, "changed");
            }
            DispatchCommand::RestartService { service } => {
                self.restart_service(&service).await;
            }
        }
    }

    /// Invoke the service manager and report the outcome.
    ///
    /// Failures are logged and swallowed: a failed restart must never take
    /// the dispatcher down, and an un-invokable manager is reported the same
    /// way as a non-zero exit.
    async fn restart_service(&mut self, service: &str) {
        info!(service = %service, "restarting service");

        match self.manager.restart(service).await {
            Ok(output) if output.success => {
                info!(service = %service, "service restarted");
            }
            Ok(output) => {
                warn!(
                    service = %service,
                    exit_code = output.code,
                    stderr = %output.stderr.trim(),
                    "service restart failed"
                );
            }
            Err(err) => {
                warn!(
                    service = %service,
                    error = %err,
                    "failed to invoke service manager"
                );
            }
        }
    }
}
