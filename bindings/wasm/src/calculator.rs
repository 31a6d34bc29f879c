use std::collections::BTreeMap;

use ejare_common::{Field, RawInputs};
use ejare_eval::{CalcConfig, Calculator as CoreCalculator};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::errors::CalcFailure;
use crate::utils::{console_warn, to_js_value};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(f64),
}

/// Read a `{ fieldName: string | number }` object into a snapshot.
/// Unknown keys are reported to the console and skipped.
pub(crate) fn raw_inputs_from_js(inputs: JsValue) -> Result<RawInputs, JsValue> {
    let entries: BTreeMap<String, Option<Scalar>> = serde_wasm_bindgen::from_value(inputs)
        .map_err(|e| crate::utils::js_error(format!("invalid inputs: {e}")))?;

    let mut raw = RawInputs::new();
    for (key, value) in entries {
        let Some(field) = Field::parse(&key) else {
            console_warn(&format!("ejare: ignoring unknown field `{key}`"));
            continue;
        };
        match value {
            Some(Scalar::Text(s)) => raw.set(field, s),
            Some(Scalar::Number(n)) => raw.set(field, n.to_string()),
            None => {}
        }
    }
    Ok(raw)
}

#[wasm_bindgen]
pub struct Calculator {
    inner: CoreCalculator,
}

#[wasm_bindgen]
impl Calculator {
    /// `strictZeroBase` rejects a zero previous total in percent mode too.
    #[wasm_bindgen(constructor)]
    pub fn new(strict_zero_base: Option<bool>) -> Calculator {
        let config = if strict_zero_base.unwrap_or(false) {
            CalcConfig::strict()
        } else {
            CalcConfig::lenient()
        };
        Calculator {
            inner: CoreCalculator::new(config),
        }
    }

    /// Returns the calculation object, or throws a `CalcFailure`.
    pub fn calculate(&self, inputs: JsValue) -> Result<JsValue, JsValue> {
        let raw = raw_inputs_from_js(inputs)?;
        match self.inner.calculate(&raw) {
            Ok(calc) => to_js_value(&calc),
            Err(err) => Err(CalcFailure::from(&err).into()),
        }
    }
}
