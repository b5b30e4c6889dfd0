//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core, engine, types}` so
//! integration tests, benches and the headless runner share one import path.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;
