use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use watchsvc::errors::Result;
use watchsvc::svc::{CmdOutput, ServiceManager};

/// What the fake manager should do when asked to restart a service.
#[derive(Debug, Clone)]
pub enum RestartBehaviour {
    /// Exit code 0.
    Succeed,
    /// Non-zero exit with the given code and stderr text.
    Fail { code: i32, stderr: String },
    /// The manager cannot be invoked at all (spawn error).
    Unavailable { message: String },
}

/// A fake service manager that:
/// - records which services were "restarted" (in call order)
/// - returns a scripted outcome per service (default: success)
/// - answers `is_active` from a scripted status table (default: "inactive").
pub struct FakeServiceManager {
    restarted: Arc<Mutex<Vec<String>>>,
    behaviours: HashMap<String, RestartBehaviour>,
    statuses: HashMap<String, String>,
}

impl FakeServiceManager {
    pub fn new(restarted: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            restarted,
            behaviours: HashMap::new(),
            statuses: HashMap::new(),
        }
    }

    pub fn with_behaviour(mut self, service: &str, behaviour: RestartBehaviour) -> Self {
        self.behaviours.insert(service.to_string(), behaviour);
        self
    }

    pub fn with_status(mut self, service: &str, status: &str) -> Self {
        self.statuses.insert(service.to_string(), status.to_string());
        self
    }
}

impl ServiceManager for FakeServiceManager {
    fn restart(
        &mut self,
        service: &str,
    ) -> Pin<Box<dyn Future<Output = Result<CmdOutput>> + Send + '_>> {
        let behaviour = self
            .behaviours
            .get(service)
            .cloned()
            .unwrap_or(RestartBehaviour::Succeed);

        {
            let mut guard = self.restarted.lock().unwrap();
            guard.push(service.to_string());
        }

        Box::pin(async move {
            match behaviour {
                RestartBehaviour::Succeed => Ok(CmdOutput {
                    success: true,
                    code: 0,
                    stdout: String::new(),
                    stderr: String::new(),
                }),
                RestartBehaviour::Fail { code, stderr } => Ok(CmdOutput {
                    success: false,
                    code,
                    stdout: String::new(),
                    stderr,
                }),
                RestartBehaviour::Unavailable { message } => Err(anyhow!(message).into()),
            }
        })
    }

    fn is_active(
        &mut self,
        service: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        let status = self
            .statuses
            .get(service)
            .cloned()
            .unwrap_or_else(|| "inactive".to_string());

        Box::pin(async move { Ok(status) })
    }
}
