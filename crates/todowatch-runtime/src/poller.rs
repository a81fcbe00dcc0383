use crate::client::TodoClient;
use crate::engine::PollEngine;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Scheduler pass cadence; also bounds shutdown latency
const TICK: Duration = Duration::from_millis(100);

/// Poll lifecycle notifications delivered to the view
#[derive(Debug, Clone)]
pub enum PollEvent {
    Started,
    Updated { count: usize },
    Failed(String),
}

/// Background thread that drives a shared [`PollEngine`]
///
/// Each pass locks the engine just long enough to ask whether a poll is
/// due and to record the outcome; the blocking fetch itself runs off-lock
/// so the view never stalls behind the network.
pub struct Poller {
    engine: Arc<Mutex<PollEngine>>,
    client: TodoClient,
    events: Sender<PollEvent>,
    stop: Arc<AtomicBool>,
}

/// Owned timer resource returned by [`Poller::start`]
///
/// Dropping the handle stops the poller; stopping twice is fine.
pub struct PollerHandle {
    join: Option<JoinHandle<()>>,
    stop: Arc<AtomicBool>,
}

impl Poller {
    pub fn new(
        engine: Arc<Mutex<PollEngine>>,
        client: TodoClient,
        events: Sender<PollEvent>,
    ) -> Self {
        Self {
            engine,
            client,
            events,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Spawn the background polling thread
    pub fn start(self) -> PollerHandle {
        let stop = Arc::clone(&self.stop);
        let join = thread::Builder::new()
            .name("todowatch-poller".into())
            .spawn(move || {
                self.run();
            })
            .expect("spawn todowatch-poller thread");
        PollerHandle {
            join: Some(join),
            stop,
        }
    }

    fn run(self) {
        while !self.stop.load(Ordering::Relaxed) {
            let ticket = {
                let mut engine = match self.engine.lock() {
                    Ok(engine) => engine,
                    Err(poisoned) => poisoned.into_inner(),
                };
                let now = Instant::now();
                if engine.poll_due(now) {
                    Some(engine.begin_poll(now))
                } else {
                    None
                }
            };

            if let Some(ticket) = ticket {
                let _ = self.events.send(PollEvent::Started);
                let outcome = self.client.fetch();
                let received_at = Utc::now();

                let mut engine = match self.engine.lock() {
                    Ok(engine) => engine,
                    Err(poisoned) => poisoned.into_inner(),
                };
                match outcome {
                    Ok(items) => {
                        let count = items.len();
                        if engine.complete(ticket, Ok(items), received_at) {
                            let _ = self.events.send(PollEvent::Updated { count });
                        }
                    }
                    Err(err) => {
                        let message = err.to_string();
                        if engine.complete(ticket, Err(err), received_at) {
                            let _ = self.events.send(PollEvent::Failed(message));
                        }
                    }
                }
            }

            thread::sleep(TICK);
        }
    }
}

impl PollerHandle {
    /// Signal the poller to stop and wait for the thread to exit
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }

    /// Signal stop without waiting
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
