//! Client scenarios for both demos. All observable output goes through the given [`Notifier`].

use std::sync::Arc;

use handler_chain::{DirectorHandler, HandlerChain, ManagerHandler, UnhandledPolicy};
use memento::{Caretaker, TextBox};
use patterns_core::{HandlerResponse, Notifier, Request, Result};
use tracing::{info, instrument};

use crate::cli::Commands;
use crate::config::DemoConfig;

/// Runs the demo(s) selected by `command`. `all` runs the chain demo, then the memento demo.
pub fn run(
    command: &Commands,
    config: &DemoConfig,
    notifier: Arc<dyn Notifier>,
) -> anyhow::Result<()> {
    match command {
        Commands::Chain => {
            handle_chain(notifier, config)?;
        }
        Commands::Memento => {
            run_memento_demo(notifier.as_ref())?;
        }
        Commands::All => {
            handle_chain(notifier.clone(), config)?;
            run_memento_demo(notifier.as_ref())?;
        }
    }
    Ok(())
}

fn handle_chain(notifier: Arc<dyn Notifier>, config: &DemoConfig) -> Result<()> {
    let responses = run_chain_demo(notifier, config.unhandled_policy())?;
    info!(responses = ?responses, "chain demo finished");
    Ok(())
}

/// Builds Manager → Director and dispatches a vacation request (10 days off) followed by a raise
/// request (10000). Returns each request's outcome in dispatch order.
#[instrument(skip(notifier))]
pub fn run_chain_demo(
    notifier: Arc<dyn Notifier>,
    policy: UnhandledPolicy,
) -> Result<Vec<HandlerResponse>> {
    let chain = HandlerChain::builder()
        .add_handler(Box::new(ManagerHandler::new(notifier.clone())))
        .add_handler(Box::new(DirectorHandler::new(notifier)))
        .policy(policy)
        .build();
    info!(handlers = ?chain.handler_names(), "chain ready");

    let requests = [Request::vacation(10), Request::raise(10000)];
    requests.iter().map(|request| chain.handle(request)).collect()
}

/// Sets "Hello World", parks a snapshot with a caretaker, overwrites the text, then restores it,
/// reporting the text at each step.
#[instrument(skip(notifier))]
pub fn run_memento_demo(notifier: &dyn Notifier) -> Result<TextBox> {
    let mut text_box = TextBox::new();
    text_box.set_text("Hello World");
    notifier.notify(text_box.text());

    let mut caretaker = Caretaker::new();
    caretaker.set_snapshot(text_box.create_snapshot());
    notifier.notify("Memento is set");

    text_box.set_text("Whoops, we need to go back to Hello World.");
    notifier.notify(text_box.text());

    text_box.restore(caretaker.snapshot())?;
    notifier.notify(text_box.text());

    Ok(text_box)
}
