//! Core data types of the machine.
//!
//! This module contains the plain data the engine works on:
//! - Declarative configuration of states and transitions
//! - The linear undo/redo history of visited states
//!
//! Nothing here performs transitions; see [`crate::machine`] for that.

mod config;
mod history;

pub use config::{MachineConfig, StateConfig};
pub use history::{History, HistoryEntry};
