//! # Handler chain
//!
//! A singly linked chain of approvers. Each [`Handler`] either acts on a request of the type it
//! recognizes or forwards it to its successor; the first match ends the dispatch. [`HandlerChain`]
//! links handlers in order of succession and decides what an unmatched request means via
//! [`UnhandledPolicy`].

mod approvers;
mod chain;
mod handler;
mod policy;

pub use approvers::{DirectorHandler, ManagerHandler};
pub use chain::{ChainBuilder, HandlerChain};
pub use handler::Handler;
pub use policy::UnhandledPolicy;

// Integration tests live in tests/handler_chain_test.rs
