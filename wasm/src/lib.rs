//! WebAssembly bindings for browser-side form handling
//!
//! Exposes the same input coercion, transaction payload building and currency
//! formatting the terminal console uses, so a web front end submits identical
//! request bodies.

use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::{
    coerce_amount, coerce_count, format_vnd, EntityForm, Language, Lookups, TransactionForm,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("warehouse console bindings loaded"));
}

fn language(code: &str) -> Language {
    code.parse().unwrap_or_default()
}

/// Current value of a count input; empty input becomes 0
#[wasm_bindgen]
pub fn coerce_count_input(field: &str, input: &str, lang: &str) -> Result<u32, JsValue> {
    coerce_count(field, input).map_err(|e| JsValue::from_str(&e.localized(language(lang))))
}

/// Current value of an amount input as a number; empty input becomes 0
#[wasm_bindgen]
pub fn coerce_amount_input(field: &str, input: &str, lang: &str) -> Result<f64, JsValue> {
    let amount = coerce_amount(field, input)
        .map_err(|e| JsValue::from_str(&e.localized(language(lang))))?;
    Ok(to_f64(amount))
}

/// Build the request body for a transaction form
///
/// `lookups_json` may be empty, in which case references are not checked.
/// Throws the localized message of the first blocking field.
#[wasm_bindgen]
pub fn build_transaction_payload(
    form_json: &str,
    lookups_json: &str,
    lang: &str,
) -> Result<String, JsValue> {
    transaction_body(form_json, lookups_json, language(lang)).map_err(|e| JsValue::from_str(&e))
}

/// Format an amount in dong, e.g. `1,200,000 VNĐ`
#[wasm_bindgen(js_name = format_vnd)]
pub fn format_vnd_amount(amount: f64) -> String {
    format_vnd(Decimal::try_from(amount).unwrap_or(Decimal::ZERO))
}

/// Field names shown for the given transaction type
#[wasm_bindgen]
pub fn transaction_fields(kind: &str) -> js_sys::Array {
    let mut form = TransactionForm::default();
    let fields = js_sys::Array::new();
    if form.set_field("type", kind).is_ok() {
        for field in form.visible_fields() {
            fields.push(&JsValue::from_str(field));
        }
    }
    fields
}

fn transaction_body(form_json: &str, lookups_json: &str, language: Language) -> Result<String, String> {
    let form: TransactionForm =
        serde_json::from_str(form_json).map_err(|e| format!("Invalid form JSON: {}", e))?;

    let payload = if lookups_json.trim().is_empty() {
        form.payload()
    } else {
        let lookups: Lookups = serde_json::from_str(lookups_json)
            .map_err(|e| format!("Invalid lookups JSON: {}", e))?;
        lookups.submit(&form)
    }
    .map_err(|e| e.localized(language))?;

    to_json(&payload)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn to_f64(amount: Decimal) -> f64 {
    amount.to_string().parse().unwrap_or(0.0)
}
