//! Core types: request kind and status, the request value object, and handler response.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of approval being requested; each handler in the chain recognizes one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestType {
    Vacation,
    Raise,
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestType::Vacation => f.write_str("Vacation"),
            RequestType::Raise => f.write_str("Raise"),
        }
    }
}

/// Approval status. Set by the caller on creation; the chain never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Denied,
}

/// A request dispatched into the chain. `meta` carries type-specific data such as `daysOff`
/// or `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub meta: Map<String, Value>,
}

impl Request {
    /// Creates a pending request with empty meta.
    pub fn new(request_type: RequestType) -> Self {
        Self {
            request_type,
            status: RequestStatus::Pending,
            meta: Map::new(),
        }
    }

    /// Pending vacation request with `meta.daysOff`.
    pub fn vacation(days_off: u32) -> Self {
        Self::new(RequestType::Vacation).with_meta("daysOff", days_off)
    }

    /// Pending raise request with `meta.amount`.
    pub fn raise(amount: u64) -> Self {
        Self::new(RequestType::Raise).with_meta("amount", amount)
    }

    /// Sets a meta entry, replacing any previous value under `key`.
    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.meta.insert(key.to_string(), value.into());
        self
    }

    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// JSON rendering used in handler notifications.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Result of pushing a request through a handler or a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// A handler recognized the request and acted on it; forwarding stopped there.
    Handled { handler: &'static str },
    /// The request reached the end of the chain without a match.
    Dropped,
}
