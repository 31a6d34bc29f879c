use ejare_common::CalcError;
use wasm_bindgen::prelude::*;

/// A calculation failure as seen from JavaScript. Thrown by `calculate`.
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct CalcFailure {
    kind: String,
    message: Option<String>,
    required_rent: Option<f64>,
    deposit_delta: Option<f64>,
}

#[wasm_bindgen]
impl CalcFailure {
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.kind.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> Option<String> {
        self.message.clone()
    }

    #[wasm_bindgen(getter, js_name = "requiredRent")]
    pub fn required_rent(&self) -> Option<f64> {
        self.required_rent
    }

    #[wasm_bindgen(getter, js_name = "depositDelta")]
    pub fn deposit_delta(&self) -> Option<f64> {
        self.deposit_delta
    }

    #[wasm_bindgen(js_name = "toString")]
    pub fn to_string(&self) -> String {
        match &self.message {
            Some(msg) => format!("CalcFailure: {}: {}", self.kind, msg),
            None => format!("CalcFailure: {}", self.kind),
        }
    }
}

impl From<&CalcError> for CalcFailure {
    fn from(err: &CalcError) -> Self {
        CalcFailure {
            kind: err.kind.code().to_string(),
            message: err.message.clone(),
            required_rent: err.required_rent(),
            deposit_delta: err.deposit_delta(),
        }
    }
}
