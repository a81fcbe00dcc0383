// NOTE: Architecture Rationale
//
// Why a shared engine instead of state inside the TUI?
// - The poll cycle and the view mutate the same state (filter, pause flag,
//   collection); one Mutex<PollEngine> keeps a single source of truth
// - The engine is clock-parameterized and I/O-free, so every transition is
//   unit-testable without a network or a terminal
//
// Why provider adapters (not one parser)?
// - The public demo endpoints disagree on both URL parameters (_limit vs
//   limit) and field names (title vs todo, enveloped vs bare array)
// - Normalizing at the adapter boundary keeps the rest of the program on
//   one canonical TodoItem shape

mod args;
mod commands;
mod handlers;
mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
