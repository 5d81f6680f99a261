//! Stock movement models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Goods received from a supplier
    #[default]
    Import,
    /// Goods shipped to a customer
    Export,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Import => "import",
            TransactionType::Export => "export",
        }
    }

    /// Name of the counterparty reference this type requires
    pub fn counterparty_field(&self) -> &'static str {
        match self {
            TransactionType::Import => "supplier_id",
            TransactionType::Export => "customer_id",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "import" | "nhap" | "nhập" => Ok(TransactionType::Import),
            "export" | "xuat" | "xuất" => Ok(TransactionType::Export),
            _ => Err(()),
        }
    }
}

/// A transaction as returned by `GET /transactions`
///
/// The backend echoes reference keys in camelCase; both spellings are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(alias = "productId")]
    pub product_id: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub date: NaiveDate,
    #[serde(alias = "employeeId")]
    pub employee_id: String,
    #[serde(default, alias = "supplierId")]
    pub supplier_id: Option<String>,
    #[serde(default, alias = "customerId")]
    pub customer_id: Option<String>,
}

impl Transaction {
    pub fn total_amount(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Supplier for imports, customer for exports
    pub fn counterparty(&self) -> Option<&str> {
        match self.kind {
            TransactionType::Import => self.supplier_id.as_deref(),
            TransactionType::Export => self.customer_id.as_deref(),
        }
    }
}

/// Body of `POST /transactions` and `PUT /transactions/{id}`
///
/// Keys are snake_case. Both counterparty keys are always present; the one
/// that does not apply to `kind` is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub product_id: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub date: NaiveDate,
    pub employee_id: String,
    pub supplier_id: Option<String>,
    pub customer_id: Option<String>,
}
