// src/svc/manager.rs

//! Pluggable service-manager abstraction.
//!
//! The dispatcher talks to a `ServiceManager` instead of shelling out
//! directly. This makes it easy to swap in a fake manager in tests while
//! keeping the production implementation in [`systemctl`](super::systemctl).
//!
//! - [`Systemctl`](super::Systemctl) is the default implementation used by
//!   `watchsvc`. It invokes the host init system's control command.
//! - Tests can provide their own `ServiceManager` that, for example, records
//!   which services were restarted and returns scripted outcomes.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

/// Captured result of one service-manager invocation.
///
/// The contract with the external process manager: exit code 0 means
/// success; anything else comes with diagnostic text on stderr.
#[derive(Debug, Clone)]
pub struct CmdOutput {
    pub success: bool,
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Trait abstracting the external process manager.
///
/// Production code uses [`Systemctl`](super::Systemctl); tests can provide
/// their own implementation that doesn't touch the OS.
pub trait ServiceManager: Send {
    /// Issue a restart command for the named service, synchronously from the
    /// caller's point of view, capturing exit status and diagnostics.
    ///
    /// An `Err` here means the manager could not be invoked at all (e.g.
    /// binary missing); callers report that the same way as a non-zero exit.
    fn restart(
        &mut self,
        service: &str,
    ) -> Pin<Box<dyn Future<Output = Result<CmdOutput>> + Send + '_>>;

    /// Query the current up/down status of the named service.
    ///
    /// Returns the status word the manager printed (e.g. `"active"`,
    /// `"inactive"`, `"failed"`). A non-zero exit from the query is a valid
    /// "down" answer, not an error.
    fn is_active(
        &mut self,
        service: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>>;
}
