//! WebAssembly bindings for register formatting and run speed control.
//!
//! This module provides JavaScript-friendly wrappers around the core API.
//! Bases cross the boundary as their legacy numeric codes (10, 16, 0).

use wasm_bindgen::prelude::*;
use crate::{Base, DisplayBase, SimContext};
use crate::display;
use crate::speed;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Formatter with a stored default base.
#[wasm_bindgen]
pub struct WasmFormatter {
    display: DisplayBase,
}

#[wasm_bindgen]
impl WasmFormatter {
    /// Create a formatter defaulting to decimal.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            display: DisplayBase::default(),
        }
    }

    /// Current default base code.
    #[wasm_bindgen]
    pub fn base(&self) -> i32 {
        self.display.get().code()
    }

    /// Set the default base code. Codes other than 10 and 16 are ignored.
    #[wasm_bindgen]
    pub fn set_base(&self, code: i32) {
        self.display.set_code(code);
    }

    /// Format a signed word in the default base.
    #[wasm_bindgen]
    pub fn format_int(&self, value: i32) -> String {
        self.display.format_int(value)
    }

    /// Format an unsigned word in the default base.
    #[wasm_bindgen]
    pub fn format_unsigned(&self, value: i32) -> String {
        self.display.format_unsigned(value)
    }
}

impl Default for WasmFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a signed word with an explicit base code.
#[wasm_bindgen]
pub fn wasm_format_int(value: i32, code: i32) -> String {
    display::format_int(value, Base::from_code_lossy(code))
}

/// Format an unsigned word with an explicit base code.
#[wasm_bindgen]
pub fn wasm_format_unsigned(value: i32, code: i32) -> String {
    display::format_unsigned(value, Base::from_code_lossy(code))
}

/// Format single-precision register bits.
#[wasm_bindgen]
pub fn wasm_format_float_bits(bits: i32, code: i32) -> String {
    display::format_float_bits(bits, Base::from_code_lossy(code))
}

/// Format double-precision register bits given as two words.
#[wasm_bindgen]
pub fn wasm_format_double_bits(high: i32, low: i32, code: i32) -> String {
    let bits = ((high as u32 as u64) << 32) | low as u32 as u64;
    display::format_double_bits(bits as i64, Base::from_code_lossy(code))
}

/// Run speed control for one simulator run.
#[wasm_bindgen]
pub struct WasmRunSpeed {
    ctx: SimContext,
}

#[wasm_bindgen]
impl WasmRunSpeed {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            ctx: SimContext::new(),
        }
    }

    /// Current rate in instructions per second (40 means unlimited).
    #[wasm_bindgen]
    pub fn rate(&self) -> f64 {
        self.ctx.run_speed().run_speed()
    }

    /// Current slider index.
    #[wasm_bindgen]
    pub fn index(&self) -> usize {
        self.ctx.run_speed().index()
    }

    /// Move the slider.
    #[wasm_bindgen]
    pub fn set_index(&self, index: usize) -> Result<(), JsError> {
        self.ctx.run_speed()
            .set_index(index)
            .map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// Label for the current slider position.
    #[wasm_bindgen]
    pub fn label(&self) -> String {
        self.ctx.run_speed().label()
    }

    /// Whether execution is unthrottled.
    #[wasm_bindgen]
    pub fn is_unlimited(&self) -> bool {
        self.ctx.run_speed().is_unlimited()
    }
}

impl Default for WasmRunSpeed {
    fn default() -> Self {
        Self::new()
    }
}

/// All rates of the table, in index order.
#[wasm_bindgen]
pub fn wasm_speed_table() -> js_sys::Float64Array {
    js_sys::Float64Array::from(&speed::SPEED_TABLE[..])
}

/// Table as a JSON array of rows.
#[wasm_bindgen]
pub fn wasm_speed_table_json() -> Result<String, JsError> {
    serde_json::to_string(&speed::speed_table())
        .map_err(|e| JsError::new(&format!("{}", e)))
}
