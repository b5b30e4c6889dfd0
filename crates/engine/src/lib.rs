//! Engine - frame-stepped session driver
//!
//! The core [`Game`](blockfall_core::Game) queues events and leaves the ghost
//! projection stale until asked. A [`Session`] is the single-threaded loop
//! around it: apply intents, step time, run the post-step ghost hook, and
//! hand every queued event to an [`EventSink`].
//!
//! - [`sink`]: observer trait plus recording and logging sinks
//! - [`session`]: the step loop
//! - [`script`]: comma-separated intent scripts for headless runs

pub mod script;
pub mod session;
pub mod sink;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use script::{Script, ScriptError};
pub use session::Session;
pub use sink::{EventSink, LogSink, Recorder};
