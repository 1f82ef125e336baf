//! Bit-exact rendering of register values.
//!
//! All functions here are pure and total. A base a formatter has no special
//! rendering for falls through to its decimal form.

use serde::Serialize;
use super::ascii::word_to_ascii;
use super::Base;

/// Quiet NaN produced when a single-precision value is bit-cast.
pub const CANONICAL_NAN_F32: u32 = 0x7fc0_0000;

/// Quiet NaN produced when a double-precision value is bit-cast.
pub const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;

/// Length of the `0x` marker in front of every hex rendering.
const HEX_PREFIX_LEN: usize = 2;

/// `0x` followed by exactly 8 lowercase hex digits.
#[inline]
pub fn hex32(value: i32) -> String {
    format!("0x{:08x}", value as u32)
}

/// `0x` followed by exactly 16 lowercase hex digits.
#[inline]
pub fn hex64(value: i64) -> String {
    format!("0x{:016x}", value as u64)
}

/// Render a word as unsigned.
///
/// Hex gives the same result as [`format_int`]; every other base gives the
/// unsigned decimal value, so `-1` renders as `4294967295`.
pub fn format_unsigned(value: i32, base: Base) -> String {
    match base {
        Base::Hexadecimal => hex32(value),
        _ => (value as u32).to_string(),
    }
}

/// Render a word as a signed integer.
pub fn format_int(value: i32, base: Base) -> String {
    match base {
        Base::Hexadecimal => hex32(value),
        Base::Decimal => value.to_string(),
        Base::Ascii => word_to_ascii(value),
        #[allow(unreachable_patterns)]
        _ => value.to_string(),
    }
}

/// Render a doubleword as a signed integer.
pub fn format_long(value: i64, base: Base) -> String {
    match base {
        Base::Hexadecimal => hex64(value),
        _ => value.to_string(),
    }
}

/// Render the raw bits of a single-precision register.
///
/// Hex never goes through `f32`, so every NaN payload is shown as stored.
/// The decimal form reinterprets the bits and prints `NaN` for all of them.
pub fn format_float_bits(bits: i32, base: Base) -> String {
    match base {
        Base::Hexadecimal => hex32(bits),
        _ => float_to_string(f32::from_bits(bits as u32)),
    }
}

/// Render the raw bits of a double-precision register.
pub fn format_double_bits(bits: i64, base: Base) -> String {
    match base {
        Base::Hexadecimal => hex64(bits),
        _ => double_to_string(f64::from_bits(bits as u64)),
    }
}

/// Render a single-precision value.
///
/// Unlike [`format_float_bits`], NaN values are shown as the canonical NaN.
pub fn format_float(value: f32, base: Base) -> String {
    match base {
        Base::Hexadecimal => hex32(float_bits(value) as i32),
        _ => float_to_string(value),
    }
}

/// Render a double-precision value.
///
/// The hex form is assembled from two 32-bit renderings: the high word, then
/// the low word without its `0x` marker.
pub fn format_double(value: f64, base: Base) -> String {
    match base {
        Base::Hexadecimal => {
            let bits = double_bits(value);
            let high = hex32(high_word(bits));
            let low = hex32(low_word(bits));
            format!("{}{}", high, &low[HEX_PREFIX_LEN..])
        }
        _ => double_to_string(value),
    }
}

/// Bits of `value`, with every NaN mapped to [`CANONICAL_NAN_F32`].
#[inline]
pub fn float_bits(value: f32) -> u32 {
    if value.is_nan() { CANONICAL_NAN_F32 } else { value.to_bits() }
}

/// Bits of `value`, with every NaN mapped to [`CANONICAL_NAN_F64`].
#[inline]
pub fn double_bits(value: f64) -> u64 {
    if value.is_nan() { CANONICAL_NAN_F64 } else { value.to_bits() }
}

/// Upper 32 bits of a doubleword.
#[inline]
pub const fn high_word(bits: u64) -> i32 {
    (bits >> 32) as i32
}

/// Lower 32 bits of a doubleword.
#[inline]
pub const fn low_word(bits: u64) -> i32 {
    bits as i32
}

fn float_to_string(value: f32) -> String {
    format!("{:?}", value)
}

fn double_to_string(value: f64) -> String {
    format!("{:?}", value)
}

/// Every rendering of a single word, as shown side by side in a register view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    pub base: Base,
    pub int: String,
    pub unsigned: String,
    pub float: String,
    pub ascii: String,
}

/// Render `bits` as signed, unsigned and float in `base`, plus its ASCII form.
pub fn render_all(bits: i32, base: Base) -> Rendering {
    Rendering {
        base,
        int: format_int(bits, base),
        unsigned: format_unsigned(bits, base),
        float: format_float_bits(bits, base),
        ascii: format_int(bits, Base::Ascii),
    }
}
