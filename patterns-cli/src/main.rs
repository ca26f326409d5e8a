//! patterns CLI: run the approval chain demo, the text snapshot demo, or both. Config from env
//! and optional CLI args.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use patterns_cli::{run, Cli, DemoConfig};
use patterns_core::{init_tracing, Notifier, TracingNotifier};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = DemoConfig::load(cli.policy)?;
    config.validate()?;
    init_tracing(config.log_file())?;

    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    run(&cli.command, &config, notifier)
}
