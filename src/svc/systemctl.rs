// src/svc/systemctl.rs

use std::future::Future;
use std::pin::Pin;

use anyhow::Context;
use tokio::process::Command;
use tracing::debug;

use crate::errors::Result;
use crate::svc::manager::{CmdOutput, ServiceManager};

/// Production service manager backed by `systemctl`.
///
/// - Restarts: `systemctl restart <service>`
/// - Status:   `systemctl is-active <service>` (status word on stdout)
#[derive(Debug, Clone, Default)]
pub struct Systemctl;

impl Systemctl {
    pub fn new() -> Self {
        Self
    }

    async fn run(&self, args: &[&str]) -> Result<CmdOutput> {
        debug!(?args, "invoking systemctl");

        let output = Command::new("systemctl")
            .args(args)
            .output()
            .await
            .with_context(|| format!("invoking systemctl {}", args.join(" ")))?;

        Ok(CmdOutput {
            success: output.status.success(),
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl ServiceManager for Systemctl {
    fn restart(
        &mut self,
        service: &str,
    ) -> Pin<Box<dyn Future<Output = Result<CmdOutput>> + Send + '_>> {
        let service = service.to_string();
        Box::pin(async move { self.run(&["restart", service.as_str()]).await })
    }

    fn is_active(
        &mut self,
        service: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        let service = service.to_string();
        Box::pin(async move {
            // `is-active` exits non-zero for inactive/failed units while
            // still printing the status word, so only stdout matters here.
            let output = self.run(&["is-active", service.as_str()]).await?;
            Ok(output.stdout.trim().to_string())
        })
    }
}
