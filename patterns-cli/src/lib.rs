//! # patterns-cli
//!
//! Argument parsing, env config, and the two runnable demos (approval chain, text snapshot).

pub mod cli;
pub mod config;
pub mod demo;

pub use cli::{Cli, Commands};
pub use config::DemoConfig;
pub use demo::{run, run_chain_demo, run_memento_demo};
