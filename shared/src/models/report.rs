//! Read-only report payloads computed by the backend

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of `GET /inventory-report`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryReportRow {
    pub warehouse_id: String,
    pub product_id: String,
    pub product_name: String,
    pub current_stock: i64,
    pub total_imports: i64,
    pub total_exports: i64,
}

impl InventoryReportRow {
    pub fn net_movement(&self) -> i64 {
        self.total_imports - self.total_exports
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryReport(pub Vec<InventoryReportRow>);

/// One row of `GET /revenue-report`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueReportRow {
    /// `YYYY-MM`
    pub month: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevenueReport(pub Vec<RevenueReportRow>);

impl RevenueReport {
    pub fn total(&self) -> Decimal {
        self.0.iter().map(|row| row.total_revenue).sum()
    }
}

fn not_available() -> String {
    "N/A".to_string()
}

/// Summary figures from `GET /dashboard-stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: i64,
    pub new_orders: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_inventory_value: Decimal,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total_revenue_last_month: Decimal,
    #[serde(default)]
    pub pending_transactions: i64,
    #[serde(default = "not_available")]
    pub top_selling_product: String,
}
