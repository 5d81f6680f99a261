//! Customer and order history models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer as returned by `GET /customers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Body of `POST /customers` and `PUT /customers/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl From<&Customer> for CustomerPayload {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
        }
    }
}

/// A past export to a customer (`GET /customers/{id}/orders`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerOrder {
    pub id: String,
    #[serde(alias = "productId")]
    pub product_id: String,
    pub quantity: i64,
    #[serde(rename = "totalAmount", with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub date: NaiveDate,
}
