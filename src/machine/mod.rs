//! The state machine engine.
//!
//! # Key Concepts
//!
//! - **Machine**: holds a configuration and a history cursor
//! - **Transitions**: taken by naming a state directly or by triggering an event
//! - **Undo/redo**: cursor moves through history; a new transition after an
//!   undo discards the undone branch
//!
//! Failed operations never modify the machine. Successful transitions,
//! undo, redo and reset are reported as `tracing` debug events.

mod engine;
mod error;

pub use engine::Machine;
pub use error::MachineError;
