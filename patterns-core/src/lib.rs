//! # patterns-core
//!
//! Shared types for the approval chain and snapshot demos: [`Request`], [`HandlerResponse`],
//! the [`Notifier`] sink, error types, and tracing initialization.

pub mod error;
pub mod logger;
pub mod notify;
pub mod types;

pub use error::{HandlerError, PatternsError, Result};
pub use logger::init_tracing;
pub use notify::{Notifier, RecordingNotifier, TracingNotifier};
pub use types::{HandlerResponse, Request, RequestStatus, RequestType};
