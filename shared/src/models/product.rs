//! Product catalogue models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as returned by `GET /products`
///
/// Several keys keep the backend's Vietnamese column names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "XuatXu")]
    pub origin: String,
    #[serde(rename = "NgaySX", default)]
    pub production_date: Option<NaiveDate>,
    #[serde(rename = "HanSD", default)]
    pub expiry_date: Option<NaiveDate>,
    /// May be negative when the backend reverses an import below zero
    #[serde(default)]
    pub stock: i64,
    #[serde(rename = "GiaNhap", with = "rust_decimal::serde::float")]
    pub purchase_cost: Decimal,
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub sale_price: Decimal,
}

/// Body of `POST /products` and `PUT /products/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub category: Option<String>,
    #[serde(rename = "XuatXu")]
    pub origin: String,
    #[serde(rename = "NgaySX")]
    pub production_date: Option<NaiveDate>,
    #[serde(rename = "HanSD")]
    pub expiry_date: Option<NaiveDate>,
    pub stock: u32,
    #[serde(rename = "GiaNhap", with = "rust_decimal::serde::float")]
    pub purchase_cost: Decimal,
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub sale_price: Decimal,
}
