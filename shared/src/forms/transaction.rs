use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{check, EntityForm, FormError};
use crate::models::{
    Customer, Employee, Product, Supplier, Transaction, TransactionPayload, TransactionType,
};
use crate::types::SelectOption;
use crate::validation::{parse_date, parse_price, parse_quantity, require_reference};

/// Import/export form
///
/// Inputs are kept as typed text until submission. Switching `kind` does not
/// clear the counterparty that no longer applies; `payload` sends it as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TransactionForm {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub product_id: String,
    pub quantity: String,
    pub price: String,
    #[validate(length(min = 1))]
    pub date: String,
    pub employee_id: String,
    pub supplier_id: String,
    pub customer_id: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::dated(Local::now().date_naive())
    }
}

impl TransactionForm {
    /// Blank import form for the given day
    pub fn dated(date: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Import,
            product_id: String::new(),
            quantity: String::new(),
            price: String::new(),
            date: date.format("%Y-%m-%d").to_string(),
            employee_id: String::new(),
            supplier_id: String::new(),
            customer_id: String::new(),
        }
    }

    /// Counterparty fields shown for the current kind
    pub fn visible_fields(&self) -> Vec<&'static str> {
        let mut fields = vec!["type", "product_id", "quantity", "price", "date", "employee_id"];
        fields.push(self.kind.counterparty_field());
        fields
    }
}

impl EntityForm for TransactionForm {
    type Record = Transaction;
    type Payload = TransactionPayload;

    const FIELDS: &'static [&'static str] = &[
        "type",
        "product_id",
        "quantity",
        "price",
        "date",
        "employee_id",
        "supplier_id",
        "customer_id",
    ];

    fn from_record(transaction: &Transaction) -> Self {
        Self {
            kind: transaction.kind,
            product_id: transaction.product_id.clone(),
            quantity: transaction.quantity.to_string(),
            price: transaction.price.normalize().to_string(),
            date: transaction.date.format("%Y-%m-%d").to_string(),
            employee_id: transaction.employee_id.clone(),
            supplier_id: transaction.supplier_id.clone().unwrap_or_default(),
            customer_id: transaction.customer_id.clone().unwrap_or_default(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        match field {
            "type" | "kind" => {
                self.kind = value.parse().map_err(|_| FormError::Invalid {
                    field: "type".to_string(),
                    message: "expected import or export".to_string(),
                })?
            }
            "product_id" => self.product_id = value.trim().to_string(),
            "quantity" => self.quantity = value.trim().to_string(),
            "price" => self.price = value.trim().to_string(),
            "date" => self.date = value.trim().to_string(),
            "employee_id" => self.employee_id = value.trim().to_string(),
            "supplier_id" => self.supplier_id = value.trim().to_string(),
            "customer_id" => self.customer_id = value.trim().to_string(),
            _ => return Err(FormError::unknown_field(field)),
        }
        Ok(())
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "type" | "kind" => self.kind.as_str().to_string(),
            "product_id" => self.product_id.clone(),
            "quantity" => self.quantity.clone(),
            "price" => self.price.clone(),
            "date" => self.date.clone(),
            "employee_id" => self.employee_id.clone(),
            "supplier_id" => self.supplier_id.clone(),
            "customer_id" => self.customer_id.clone(),
            _ => return None,
        };
        Some(value)
    }

    fn payload(&self) -> Result<TransactionPayload, FormError> {
        check(self)?;
        let product_id = require_reference("product_id", &self.product_id)?;
        let quantity = parse_quantity(&self.quantity)?;
        let price = parse_price(&self.price)?;
        let date = parse_date("date", &self.date)?.ok_or_else(|| FormError::required("date"))?;
        let employee_id = require_reference("employee_id", &self.employee_id)?;

        let (supplier_id, customer_id) = match self.kind {
            TransactionType::Import => (
                Some(require_reference("supplier_id", &self.supplier_id)?),
                None,
            ),
            TransactionType::Export => (
                None,
                Some(require_reference("customer_id", &self.customer_id)?),
            ),
        };

        Ok(TransactionPayload {
            kind: self.kind,
            product_id,
            quantity,
            price,
            date,
            employee_id,
            supplier_id,
            customer_id,
        })
    }
}

/// Collections the transaction form draws its references from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lookups {
    pub products: Vec<Product>,
    pub employees: Vec<Employee>,
    pub suppliers: Vec<Supplier>,
    pub customers: Vec<Customer>,
}

impl Lookups {
    /// Choices for a reference field, labelled `name (id)`
    pub fn options(&self, field: &str) -> Vec<SelectOption> {
        match field {
            "product_id" => self
                .products
                .iter()
                .map(|p| SelectOption::for_record(&p.id, &p.name))
                .collect(),
            "employee_id" => self
                .employees
                .iter()
                .map(|e| SelectOption::for_record(&e.id, &e.name))
                .collect(),
            "supplier_id" => self
                .suppliers
                .iter()
                .map(|s| SelectOption::for_record(&s.id, &s.name))
                .collect(),
            "customer_id" => self
                .customers
                .iter()
                .map(|c| SelectOption::for_record(&c.id, &c.name))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Counterparty choices for the given kind
    pub fn counterparty_options(&self, kind: TransactionType) -> Vec<SelectOption> {
        self.options(kind.counterparty_field())
    }

    /// Reject a payload that names a record missing from the lookups
    pub fn check(&self, payload: &TransactionPayload) -> Result<(), FormError> {
        fn known<'a>(
            field: &str,
            id: &str,
            mut ids: impl Iterator<Item = &'a str>,
        ) -> Result<(), FormError> {
            if ids.any(|candidate| candidate == id) {
                Ok(())
            } else {
                Err(FormError::UnknownReference {
                    field: field.to_string(),
                    id: id.to_string(),
                })
            }
        }

        known(
            "product_id",
            &payload.product_id,
            self.products.iter().map(|p| p.id.as_str()),
        )?;
        known(
            "employee_id",
            &payload.employee_id,
            self.employees.iter().map(|e| e.id.as_str()),
        )?;
        if let Some(id) = payload.supplier_id.as_deref() {
            known("supplier_id", id, self.suppliers.iter().map(|s| s.id.as_str()))?;
        }
        if let Some(id) = payload.customer_id.as_deref() {
            known("customer_id", id, self.customers.iter().map(|c| c.id.as_str()))?;
        }
        Ok(())
    }

    /// Payload from the form, checked against loaded collections
    pub fn submit(&self, form: &TransactionForm) -> Result<TransactionPayload, FormError> {
        let payload = form.payload()?;
        self.check(&payload)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn export_form() -> TransactionForm {
        let mut form = TransactionForm::dated(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        form.set_field("type", "export").unwrap();
        form.set_field("product_id", "P1").unwrap();
        form.set_field("quantity", "5").unwrap();
        form.set_field("price", "1000").unwrap();
        form.set_field("employee_id", "E1").unwrap();
        form.set_field("customer_id", "C1").unwrap();
        form
    }

    #[test]
    fn test_export_nulls_supplier() {
        let mut form = export_form();
        form.set_field("supplier_id", "S1").unwrap();

        let payload = form.payload().unwrap();
        assert_eq!(payload.quantity, 5);
        assert_eq!(payload.price, Decimal::from(1000));
        assert_eq!(payload.customer_id.as_deref(), Some("C1"));
        assert_eq!(payload.supplier_id, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "export");
        assert_eq!(json["supplier_id"], serde_json::Value::Null);
        assert_eq!(json["date"], "2024-03-01");
    }

    #[test]
    fn test_switching_type_keeps_hidden_text() {
        let mut form = export_form();
        form.set_field("type", "import").unwrap();
        assert_eq!(form.customer_id, "C1");
        assert_eq!(form.payload(), Err(FormError::required("supplier_id")));

        form.set_field("supplier_id", "S1").unwrap();
        let payload = form.payload().unwrap();
        assert_eq!(payload.supplier_id.as_deref(), Some("S1"));
        assert_eq!(payload.customer_id, None);

        form.set_field("type", "export").unwrap();
        assert_eq!(form.payload().unwrap().customer_id.as_deref(), Some("C1"));
    }

    #[test]
    fn test_quantity_rules() {
        let mut form = export_form();
        form.set_field("quantity", "").unwrap();
        assert_eq!(form.payload(), Err(FormError::required("quantity")));
        form.set_field("quantity", "0").unwrap();
        assert!(matches!(form.payload(), Err(FormError::NotPositive { .. })));
        form.set_field("quantity", "2.5").unwrap();
        assert!(matches!(form.payload(), Err(FormError::NotANumber { .. })));
    }

    #[test]
    fn test_empty_price_is_zero() {
        let mut form = export_form();
        form.set_field("price", "").unwrap();
        assert_eq!(form.payload().unwrap().price, Decimal::ZERO);
        form.set_field("price", "NaN").unwrap();
        assert!(form.payload().is_err());
    }

    #[test]
    fn test_visible_fields_follow_kind() {
        let mut form = TransactionForm::default();
        assert!(form.visible_fields().contains(&"supplier_id"));
        form.set_field("type", "xuất").unwrap();
        assert!(form.visible_fields().contains(&"customer_id"));
        assert!(!form.visible_fields().contains(&"supplier_id"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let mut form = TransactionForm::default();
        assert!(form.set_field("type", "transfer").is_err());
        assert_eq!(form.kind, TransactionType::Import);
    }
}
