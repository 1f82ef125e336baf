//! Display bases and the default-base holder.
//!
//! A [`Base`] selects how a register value is rendered. Core formatting
//! functions always take the base explicitly; [`DisplayBase`] only exists
//! for front ends that keep a "current base" setting around.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Radix used to render a register or memory value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    /// Signed or unsigned decimal, depending on the formatter.
    #[default]
    Decimal,
    /// Fixed-width, zero-padded, `0x`-prefixed lowercase hex.
    Hexadecimal,
    /// One character token per byte. Never stored as a default.
    Ascii,
}

impl Base {
    /// Legacy numeric code for decimal.
    pub const DECIMAL_CODE: i32 = 10;
    /// Legacy numeric code for hexadecimal.
    pub const HEXADECIMAL_CODE: i32 = 16;
    /// Legacy numeric code for ASCII.
    pub const ASCII_CODE: i32 = 0;

    /// All bases in menu order.
    pub const ALL: [Base; 3] = [Base::Decimal, Base::Hexadecimal, Base::Ascii];

    /// Look up a base by its legacy numeric code.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::DECIMAL_CODE => Some(Base::Decimal),
            Self::HEXADECIMAL_CODE => Some(Base::Hexadecimal),
            Self::ASCII_CODE => Some(Base::Ascii),
            _ => None,
        }
    }

    /// Like [`Base::from_code`], but unknown codes degrade to decimal.
    pub const fn from_code_lossy(code: i32) -> Self {
        match Self::from_code(code) {
            Some(base) => base,
            None => Base::Decimal,
        }
    }

    /// The legacy numeric code.
    pub const fn code(self) -> i32 {
        match self {
            Base::Decimal => Self::DECIMAL_CODE,
            Base::Hexadecimal => Self::HEXADECIMAL_CODE,
            Base::Ascii => Self::ASCII_CODE,
        }
    }

    /// Whether this base may be stored as a default.
    pub const fn is_persistable(self) -> bool {
        matches!(self, Base::Decimal | Base::Hexadecimal)
    }

    /// The other persistable base. Ascii toggles to decimal.
    pub const fn toggled(self) -> Self {
        match self {
            Base::Hexadecimal => Base::Decimal,
            _ => Base::Hexadecimal,
        }
    }

    const fn to_u8(self) -> u8 {
        match self {
            Base::Decimal => 0,
            Base::Hexadecimal => 1,
            Base::Ascii => 2,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Base::Hexadecimal,
            2 => Base::Ascii,
            _ => Base::Decimal,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base::Decimal => write!(f, "decimal"),
            Base::Hexadecimal => write!(f, "hex"),
            Base::Ascii => write!(f, "ascii"),
        }
    }
}

impl FromStr for Base {
    type Err = ParseBaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dec" | "decimal" | "10" => Ok(Base::Decimal),
            "hex" | "hexadecimal" | "16" => Ok(Base::Hexadecimal),
            "ascii" | "0" => Ok(Base::Ascii),
            _ => Err(ParseBaseError::Unknown(s.to_string())),
        }
    }
}

/// Errors from parsing a textual base name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBaseError {
    #[error("unknown display base '{0}' (expected decimal, hex or ascii)")]
    Unknown(String),
}

/// Holder for the "current base" of a display.
///
/// Safe to share between a UI thread that changes it and any number of
/// readers. Only [`Base::Decimal`] and [`Base::Hexadecimal`] are ever stored.
#[derive(Debug)]
pub struct DisplayBase {
    base: AtomicU8,
}

impl DisplayBase {
    /// Create a holder starting at `initial`. A non-persistable initial base
    /// starts the holder at decimal instead.
    pub fn new(initial: Base) -> Self {
        let initial = if initial.is_persistable() { initial } else { Base::Decimal };
        Self {
            base: AtomicU8::new(initial.to_u8()),
        }
    }

    /// Current default base.
    pub fn get(&self) -> Base {
        Base::from_u8(self.base.load(Ordering::SeqCst))
    }

    /// Set the default base.
    ///
    /// Anything other than decimal or hex is ignored without error.
    pub fn set(&self, base: Base) {
        match base {
            Base::Decimal | Base::Hexadecimal => {
                self.base.store(base.to_u8(), Ordering::SeqCst);
                tracing::debug!(%base, "default display base changed");
            }
            _ => {
                tracing::debug!(%base, "ignoring non-persistable display base");
            }
        }
    }

    /// Set the default base from a legacy numeric code. Unknown codes are ignored.
    pub fn set_code(&self, code: i32) {
        match Base::from_code(code) {
            Some(base) => self.set(base),
            None => tracing::debug!(code, "ignoring unknown display base code"),
        }
    }

    /// Flip between decimal and hex, returning the new base.
    pub fn toggle(&self) -> Base {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    /// Render a signed word in the current base.
    pub fn format_int(&self, value: i32) -> String {
        super::format::format_int(value, self.get())
    }

    /// Render an unsigned word in the current base.
    pub fn format_unsigned(&self, value: i32) -> String {
        super::format::format_unsigned(value, self.get())
    }
}

impl Default for DisplayBase {
    fn default() -> Self {
        Self::new(Base::Decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for base in Base::ALL {
            assert_eq!(Base::from_code(base.code()), Some(base));
        }
        assert_eq!(Base::from_code(8), None);
        assert_eq!(Base::from_code_lossy(2), Base::Decimal);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("hex".parse::<Base>(), Ok(Base::Hexadecimal));
        assert_eq!(" Decimal ".parse::<Base>(), Ok(Base::Decimal));
        assert_eq!("ascii".parse::<Base>(), Ok(Base::Ascii));
        assert!("octal".parse::<Base>().is_err());
    }

    #[test]
    fn test_set_ignores_ascii() {
        let holder = DisplayBase::new(Base::Hexadecimal);
        let before = holder.get();
        holder.set(Base::Ascii);
        assert_eq!(holder.get(), before);
    }

    #[test]
    fn test_set_code_ignores_unknown() {
        let holder = DisplayBase::default();
        holder.set_code(16);
        assert_eq!(holder.get(), Base::Hexadecimal);
        holder.set_code(2);
        assert_eq!(holder.get(), Base::Hexadecimal);
        holder.set_code(0);
        assert_eq!(holder.get(), Base::Hexadecimal);
        holder.set_code(10);
        assert_eq!(holder.get(), Base::Decimal);
    }

    #[test]
    fn test_ascii_initial_starts_decimal() {
        assert_eq!(DisplayBase::new(Base::Ascii).get(), Base::Decimal);
    }

    #[test]
    fn test_toggle() {
        let holder = DisplayBase::default();
        assert_eq!(holder.toggle(), Base::Hexadecimal);
        assert_eq!(holder.toggle(), Base::Decimal);
    }

    #[test]
    fn test_instance_formatting_uses_default() {
        let holder = DisplayBase::default();
        assert_eq!(holder.format_int(-1), "-1");
        assert_eq!(holder.format_unsigned(-1), "4294967295");
        holder.set(Base::Hexadecimal);
        assert_eq!(holder.format_int(-1), "0xffffffff");
        assert_eq!(holder.format_unsigned(-1), "0xffffffff");
    }
}
