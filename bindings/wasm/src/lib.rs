use wasm_bindgen::prelude::*;

mod calculator;
mod errors;
mod utils;

pub use calculator::*;
pub use errors::*;

use ejare_parse::{Locale, format_amount as core_format_amount, format_percent as core_format_percent};

#[wasm_bindgen(start)]
pub fn init() {
    utils::set_panic_hook();
}

/// Calculate with the default configuration.
#[wasm_bindgen]
pub fn calculate(inputs: JsValue) -> Result<JsValue, JsValue> {
    Calculator::new(None).calculate(inputs)
}

#[wasm_bindgen]
pub fn normalize(raw: &str) -> f64 {
    ejare_parse::normalize(raw)
}

#[wasm_bindgen(js_name = "detectMode")]
pub fn detect_mode(inputs: JsValue) -> Result<String, JsValue> {
    let raw = calculator::raw_inputs_from_js(inputs)?;
    Ok(ejare_eval::detect_mode(&raw).to_string())
}

fn display_locale(persian: Option<bool>) -> Locale {
    if persian.unwrap_or(true) {
        Locale::persian()
    } else {
        Locale::invariant()
    }
}

#[wasm_bindgen(js_name = "formatAmount")]
pub fn format_amount(value: f64, persian: Option<bool>) -> String {
    core_format_amount(value, &display_locale(persian))
}

#[wasm_bindgen(js_name = "formatPercent")]
pub fn format_percent(value: f64, decimals: Option<usize>, persian: Option<bool>) -> String {
    core_format_percent(value, decimals.unwrap_or(2), &display_locale(persian))
}
