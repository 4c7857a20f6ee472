//! Shape Swarm: a top-down arcade shooter built around an enemy swarm.
//!
//! The library holds everything; `main.rs` only calls [`game::run`], and the
//! integration tests in `tests/` build headless apps from the same modules.

pub mod game;
pub mod common;
pub mod plugins;
