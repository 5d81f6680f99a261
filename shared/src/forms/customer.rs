use validator::Validate;

use super::{check, EntityForm, FormError};
use crate::models::{Customer, CustomerPayload};

/// Customer create/edit form
#[derive(Debug, Clone, PartialEq, Eq, Default, Validate)]
pub struct CustomerForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub address: String,
}

impl EntityForm for CustomerForm {
    type Record = Customer;
    type Payload = CustomerPayload;

    const FIELDS: &'static [&'static str] = &["name", "phone", "address"];

    fn from_record(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        let value = value.trim().to_string();
        match field {
            "name" => self.name = value,
            "phone" => self.phone = value,
            "address" => self.address = value,
            _ => return Err(FormError::unknown_field(field)),
        }
        Ok(())
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "phone" => Some(self.phone.clone()),
            "address" => Some(self.address.clone()),
            _ => None,
        }
    }

    fn payload(&self) -> Result<CustomerPayload, FormError> {
        check(self)?;
        Ok(CustomerPayload {
            name: self.name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        })
    }
}
