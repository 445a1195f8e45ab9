//! Waypoint: an event-driven finite state machine with undo/redo history
//!
//! A machine is created from a declarative configuration naming an initial
//! state and, per state, the events it reacts to. The machine tracks the
//! current state and keeps a linear history of every state it has entered,
//! which can be walked backwards and forwards.
//!
//! # Core Concepts
//!
//! - **Configuration**: states and their event transitions, in declared order
//! - **Machine**: applies state changes and event triggers
//! - **History**: undo/redo cursor; new transitions discard undone states
//! - **Validation**: opt-in consistency checks of a configuration
//!
//! # Example
//!
//! ```rust
//! use waypoint::{machine_config, Machine};
//!
//! let config = machine_config! {
//!     initial: idle,
//!     idle => { run => running },
//!     running => { stop => idle, pause => paused },
//!     paused => { run => running },
//! };
//!
//! let mut machine = Machine::new(config);
//! machine.trigger("run").unwrap();
//! machine.trigger("pause").unwrap();
//! assert_eq!(machine.state(), "paused");
//!
//! assert!(machine.undo());
//! assert!(machine.undo());
//! assert!(!machine.undo());
//! assert_eq!(machine.state(), "idle");
//!
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "running");
//! assert_eq!(machine.states(Some("run")), vec!["idle", "paused"]);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use core::{History, HistoryEntry, MachineConfig, StateConfig};
pub use machine::{Machine, MachineError};
