use serde::Serialize;

pub fn set_panic_hook() {
    #[cfg(feature = "console_panic")]
    console_error_panic_hook::set_once();
}

pub fn js_error(message: impl AsRef<str>) -> wasm_bindgen::JsValue {
    wasm_bindgen::JsValue::from(js_sys::Error::new(message.as_ref()))
}

pub fn to_js_value<T: Serialize>(value: &T) -> Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue> {
    value
        .serialize(
            &serde_wasm_bindgen::Serializer::new()
                .serialize_maps_as_objects(true)
                .serialize_missing_as_null(false),
        )
        .map_err(|e| js_error(e.to_string()))
}

/// Log to the browser console; used for input that had to be ignored.
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}
