//! CLI parser.

use clap::{Parser, Subcommand};
use handler_chain::UnhandledPolicy;

#[derive(Parser, Debug)]
#[command(name = "patterns")]
#[command(about = "Run the approval chain and text snapshot demos", long_about = None)]
#[command(version)]
pub struct Cli {
    /// What the chain does with a request nobody accepts: drop or error. Overrides UNHANDLED_POLICY.
    #[arg(long, global = true)]
    pub policy: Option<UnhandledPolicy>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Dispatch a vacation and a raise request through Manager → Director.
    Chain,
    /// Edit a text box, snapshot it, overwrite it, and restore it.
    Memento,
    /// Run both demos.
    All,
}
