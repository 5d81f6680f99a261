use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::Validate;

use super::{check, EntityForm, FormError};
use crate::models::{Product, ProductPayload};
use crate::validation::{coerce_amount, coerce_count, optional_text, parse_date};

/// Product create/edit form
#[derive(Debug, Clone, PartialEq, Default, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub category: String,
    #[validate(length(min = 1))]
    pub origin: String,
    /// Signed so a negative backend value is shown rather than replaced
    pub stock: i64,
    pub purchase_cost: Decimal,
    pub sale_price: Decimal,
    pub production_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

impl EntityForm for ProductForm {
    type Record = Product;
    type Payload = ProductPayload;

    const FIELDS: &'static [&'static str] = &[
        "name",
        "category",
        "origin",
        "stock",
        "purchase_cost",
        "sale_price",
        "production_date",
        "expiry_date",
    ];

    fn from_record(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone().unwrap_or_default(),
            origin: product.origin.clone(),
            stock: product.stock,
            purchase_cost: product.purchase_cost,
            sale_price: product.sale_price,
            production_date: product.production_date,
            expiry_date: product.expiry_date,
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        match field {
            "name" => self.name = value.trim().to_string(),
            "category" => self.category = value.trim().to_string(),
            "origin" => self.origin = value.trim().to_string(),
            "stock" => self.stock = i64::from(coerce_count(field, value)?),
            "purchase_cost" => self.purchase_cost = coerce_amount(field, value)?,
            "sale_price" => self.sale_price = coerce_amount(field, value)?,
            "production_date" => self.production_date = parse_date(field, value)?,
            "expiry_date" => self.expiry_date = parse_date(field, value)?,
            _ => return Err(FormError::unknown_field(field)),
        }
        Ok(())
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "name" => self.name.clone(),
            "category" => self.category.clone(),
            "origin" => self.origin.clone(),
            "stock" => self.stock.to_string(),
            "purchase_cost" => self.purchase_cost.to_string(),
            "sale_price" => self.sale_price.to_string(),
            "production_date" => date_text(self.production_date),
            "expiry_date" => date_text(self.expiry_date),
            _ => return None,
        };
        Some(value)
    }

    fn payload(&self) -> Result<ProductPayload, FormError> {
        check(self)?;
        let stock = u32::try_from(self.stock).map_err(|_| FormError::Negative {
            field: "stock".to_string(),
        })?;
        if let (Some(made), Some(expires)) = (self.production_date, self.expiry_date) {
            if expires < made {
                return Err(FormError::Invalid {
                    field: "expiry_date".to_string(),
                    message: "must not be before production_date".to_string(),
                });
            }
        }

        Ok(ProductPayload {
            name: self.name.clone(),
            category: optional_text(&self.category),
            origin: self.origin.clone(),
            production_date: self.production_date,
            expiry_date: self.expiry_date,
            stock,
            purchase_cost: self.purchase_cost,
            sale_price: self.sale_price,
        })
    }
}

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
