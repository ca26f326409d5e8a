//! Concrete approvers: a manager signs off on vacations, a director on raises.

use std::sync::Arc;

use patterns_core::{Notifier, Request, RequestType, Result};
use tracing::info;

use crate::handler::Handler;

/// Approves vacation requests; forwards everything else.
pub struct ManagerHandler {
    notifier: Arc<dyn Notifier>,
    successor: Option<Box<dyn Handler>>,
}

impl ManagerHandler {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            successor: None,
        }
    }
}

impl Handler for ManagerHandler {
    fn name(&self) -> &'static str {
        "Manager"
    }

    fn accepts(&self) -> RequestType {
        RequestType::Vacation
    }

    fn act(&self, request: &Request) -> Result<()> {
        let body = request.to_json()?;
        info!(handler = self.name(), request_type = %request.request_type, "request handled");
        self.notifier
            .notify(&format!("{}::handleInput {}", self.name(), body));
        Ok(())
    }

    fn successor(&self) -> Option<&dyn Handler> {
        self.successor.as_deref()
    }

    fn set_successor(&mut self, next: Box<dyn Handler>) {
        self.successor = Some(next);
    }
}

/// Approves raise requests; forwards everything else.
pub struct DirectorHandler {
    notifier: Arc<dyn Notifier>,
    successor: Option<Box<dyn Handler>>,
}

impl DirectorHandler {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            successor: None,
        }
    }
}

impl Handler for DirectorHandler {
    fn name(&self) -> &'static str {
        "Director"
    }

    fn accepts(&self) -> RequestType {
        RequestType::Raise
    }

    fn act(&self, request: &Request) -> Result<()> {
        let body = request.to_json()?;
        info!(handler = self.name(), request_type = %request.request_type, "request handled");
        self.notifier
            .notify(&format!("{}::handleInput {}", self.name(), body));
        Ok(())
    }

    fn successor(&self) -> Option<&dyn Handler> {
        self.successor.as_deref()
    }

    fn set_successor(&mut self, next: Box<dyn Handler>) {
        self.successor = Some(next);
    }
}
