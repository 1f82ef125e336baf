//! Execution pacing.
//!
//! - [`table`] - the fixed index → rate table and its labels
//! - [`RunSpeed`] - the live, thread-shared index

pub mod table;
mod control;

pub use control::{RunSpeed, SpeedError};
pub use table::{
    speed_at, speed_label, speed_table, SpeedEntry,
    UNLIMITED_SPEED, SPEED_INDEX_MIN, SPEED_INDEX_MAX, SPEED_INDEX_INIT,
    SPEED_INDEX_INTERACTION_LIMIT, SPEED_TABLE,
};
