use crate::commands::build_client;
use crate::presentation::renderers::tui::{TuiWatchView, WatchContext};
use anyhow::Result;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use todowatch_runtime::{Config, PollEngine, Poller};

pub fn handle(config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let context = WatchContext {
        provider_id: client.provider_id().to_string(),
        endpoint: client.request_url(),
        interval: config.interval(),
    };

    let engine = Arc::new(Mutex::new(PollEngine::new(config.interval())));
    let (tx, rx) = mpsc::channel();

    let poller = Poller::new(Arc::clone(&engine), client, tx);
    let mut handle = poller.start();

    let result = TuiWatchView::run(engine, rx, &context);

    // Tearing down the view releases the recurring trigger
    handle.stop();

    result
}
