use validator::{validate_email, Validate};

use super::{check, EntityForm, FormError};
use crate::models::{Supplier, SupplierPayload};
use crate::validation::optional_text;

/// Supplier create/edit form
#[derive(Debug, Clone, PartialEq, Eq, Default, Validate)]
pub struct SupplierForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub contact_person: String,
    #[validate(length(min = 1))]
    pub phone: String,
    /// Blank means no email on file
    pub email: String,
    #[validate(length(min = 1))]
    pub address: String,
}

impl EntityForm for SupplierForm {
    type Record = Supplier;
    type Payload = SupplierPayload;

    const FIELDS: &'static [&'static str] = &["name", "contact_person", "phone", "email", "address"];

    fn from_record(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            contact_person: supplier.contact_person.clone(),
            phone: supplier.phone.clone(),
            email: supplier.email.clone().unwrap_or_default(),
            address: supplier.address.clone(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        let value = value.trim().to_string();
        match field {
            "name" => self.name = value,
            "contact_person" => self.contact_person = value,
            "phone" => self.phone = value,
            "email" => self.email = value,
            "address" => self.address = value,
            _ => return Err(FormError::unknown_field(field)),
        }
        Ok(())
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "name" => &self.name,
            "contact_person" => &self.contact_person,
            "phone" => &self.phone,
            "email" => &self.email,
            "address" => &self.address,
            _ => return None,
        };
        Some(value.clone())
    }

    fn payload(&self) -> Result<SupplierPayload, FormError> {
        check(self)?;
        let email = optional_text(&self.email);
        if let Some(email) = email.as_deref() {
            if !validate_email(email) {
                return Err(FormError::Invalid {
                    field: "email".to_string(),
                    message: "not a valid email address".to_string(),
                });
            }
        }

        Ok(SupplierPayload {
            name: self.name.clone(),
            contact_person: self.contact_person.clone(),
            phone: self.phone.clone(),
            email,
            address: self.address.clone(),
        })
    }
}
