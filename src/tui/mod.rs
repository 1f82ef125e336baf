//! Terminal register viewer.
//!
//! Provides an interactive view with:
//! - Register values in decimal or hex, with an optional ASCII column
//! - A run speed slider driving a paced demo loop

mod app;
mod ui;

pub use app::{ViewerApp, WatchedRegister, run_viewer};
