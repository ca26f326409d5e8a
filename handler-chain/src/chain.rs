use patterns_core::{HandlerError, HandlerResponse, Request, Result};
use tracing::{info, instrument, warn};

use crate::handler::Handler;
use crate::policy::UnhandledPolicy;

/// Collects handlers in order of succession, then links them into a [`HandlerChain`].
#[derive(Default)]
pub struct ChainBuilder {
    handlers: Vec<Box<dyn Handler>>,
    policy: UnhandledPolicy,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler; it becomes the successor of the previously added one.
    pub fn add_handler(mut self, handler: Box<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn policy(mut self, policy: UnhandledPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Links every handler to the one added after it. Any successor a handler already had is
    /// replaced, except on the last handler, which keeps its own.
    pub fn build(self) -> HandlerChain {
        let mut head: Option<Box<dyn Handler>> = None;
        for mut handler in self.handlers.into_iter().rev() {
            if let Some(next) = head.take() {
                handler.set_successor(next);
            }
            head = Some(handler);
        }
        HandlerChain {
            head,
            policy: self.policy,
        }
    }
}

/// Entry point into a linked chain of handlers.
pub struct HandlerChain {
    head: Option<Box<dyn Handler>>,
    policy: UnhandledPolicy,
}

impl HandlerChain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Wraps a head handler whose successors were linked by hand.
    pub fn from_head(head: Box<dyn Handler>, policy: UnhandledPolicy) -> Self {
        Self {
            head: Some(head),
            policy,
        }
    }

    /// First handler in the chain, if any.
    pub fn head(&self) -> Option<&dyn Handler> {
        self.head.as_deref()
    }

    pub fn policy(&self) -> UnhandledPolicy {
        self.policy
    }

    /// Names of the handlers from head to tail.
    pub fn handler_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut current = self.head();
        while let Some(handler) = current {
            names.push(handler.name());
            current = handler.successor();
        }
        names
    }

    /// Dispatches the request from the head. Returns the handler that took it, or applies the
    /// unhandled policy when nobody did.
    #[instrument(skip(self, request), fields(request_type = %request.request_type))]
    pub fn handle(&self, request: &Request) -> Result<HandlerResponse> {
        info!(policy = %self.policy, "step: handler_chain started");

        let response = match self.head() {
            Some(head) => head.handle(request)?,
            None => HandlerResponse::Dropped,
        };

        match response {
            HandlerResponse::Handled { handler } => {
                info!(handler = %handler, "step: handler_chain finished");
                Ok(HandlerResponse::Handled { handler })
            }
            HandlerResponse::Dropped => match self.policy {
                UnhandledPolicy::Drop => {
                    info!("step: handler_chain finished, request dropped");
                    Ok(HandlerResponse::Dropped)
                }
                UnhandledPolicy::Error => {
                    warn!("step: handler_chain finished, no handler accepted the request");
                    Err(HandlerError::UnhandledRequest(request.request_type).into())
                }
            },
        }
    }
}
