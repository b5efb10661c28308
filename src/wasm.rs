use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;

use crate::kind::ErrorKind;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn parse_kind(s: &str) -> Option<ErrorKind> {
    s.parse::<ErrorKind>().ok()
}

/// Returns every kind with its sentinel message.
#[wasm_bindgen]
pub fn error_kinds() -> JsValue {
    let kinds: Vec<serde_json::Value> = ErrorKind::iter()
        .map(|kind| {
            serde_json::json!({
                "kind": kind.as_ref(),
                "message": kind.message(),
            })
        })
        .collect();
    to_js(&serde_json::Value::Array(kinds))
}

/// Sentinel message for a kind name, or undefined.
#[wasm_bindgen]
pub fn sentinel_message(kind: &str) -> Option<String> {
    parse_kind(kind).map(|k| k.message().to_string())
}

#[wasm_bindgen]
pub fn is_known_kind(kind: &str) -> bool {
    parse_kind(kind).is_some()
}
