pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod poller;

pub use client::TodoClient;
pub use config::Config;
pub use engine::{PollEngine, PollSnapshot, PollTicket};
pub use error::{Error, Result};
pub use poller::{PollEvent, Poller, PollerHandle};
