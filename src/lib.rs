//! # regview
//!
//! Register display formatting and run speed control for instruction-set
//! simulators.
//!
//! Register and memory contents are rendered bit-exactly in decimal, hex or
//! ASCII, and simulated execution is paced from a fixed table of rates with
//! an "unlimited" setting at the top.

pub mod display;
pub mod speed;
pub mod context;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use display::{Base, DisplayBase, ParseBaseError, Rendering};
pub use speed::{RunSpeed, SpeedError, SpeedEntry, UNLIMITED_SPEED};
pub use context::SimContext;

#[cfg(feature = "tui")]
pub use tui::run_viewer;
