// src/svc/mod.rs

//! Service-manager boundary.
//!
//! Everything the rest of the crate knows about the host init system lives
//! behind the [`ServiceManager`] trait:
//!
//! - [`manager`] defines the trait and the captured [`CmdOutput`].
//! - [`systemctl`] is the production implementation.

pub mod manager;
pub mod systemctl;

pub use manager::{CmdOutput, ServiceManager};
pub use systemctl::Systemctl;
