//! Register value formatting.
//!
//! This module provides:
//! - [`Base`] - the closed set of display bases
//! - [`DisplayBase`] - a shareable "current base" holder for front ends
//! - pure formatters for int, unsigned, long, float and double values

mod base;
mod ascii;
pub mod format;

pub use base::{Base, DisplayBase, ParseBaseError};
pub use ascii::{byte_token, word_to_ascii};
pub use format::{
    format_int, format_unsigned, format_long,
    format_float_bits, format_double_bits, format_float, format_double,
    render_all, Rendering,
};
