use validator::Validate;

use super::{check, EntityForm, FormError};
use crate::models::{Employee, EmployeePayload, Gender};
use crate::types::Language;

/// Employee create/edit form
///
/// Revenue contribution is computed by the backend and never edited here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Validate)]
pub struct EmployeeForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub gender: Option<Gender>,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub position: String,
}

impl EntityForm for EmployeeForm {
    type Record = Employee;
    type Payload = EmployeePayload;

    const FIELDS: &'static [&'static str] = &["name", "gender", "phone", "address", "position"];

    fn from_record(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            gender: Some(employee.gender),
            phone: employee.phone.clone(),
            address: employee.address.clone(),
            position: employee.position.clone(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        match field {
            "name" => self.name = value.trim().to_string(),
            "phone" => self.phone = value.trim().to_string(),
            "address" => self.address = value.trim().to_string(),
            "position" => self.position = value.trim().to_string(),
            "gender" if value.trim().is_empty() => self.gender = None,
            "gender" => {
                let gender = value.parse::<Gender>().map_err(|_| FormError::Invalid {
                    field: field.to_string(),
                    message: "expected male, female or other".to_string(),
                })?;
                self.gender = Some(gender);
            }
            _ => return Err(FormError::unknown_field(field)),
        }
        Ok(())
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "name" => self.name.clone(),
            "gender" => self
                .gender
                .map(|g| g.label(Language::English).to_lowercase())
                .unwrap_or_default(),
            "phone" => self.phone.clone(),
            "address" => self.address.clone(),
            "position" => self.position.clone(),
            _ => return None,
        };
        Some(value)
    }

    fn payload(&self) -> Result<EmployeePayload, FormError> {
        check(self)?;
        let gender = self.gender.ok_or_else(|| FormError::required("gender"))?;

        Ok(EmployeePayload {
            name: self.name.clone(),
            gender,
            phone: self.phone.clone(),
            address: self.address.clone(),
            position: self.position.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmployeeForm {
        let mut form = EmployeeForm::default();
        form.set_field("name", "Trần Thị B").unwrap();
        form.set_field("phone", "0903334444").unwrap();
        form.set_field("address", "456 Hai Bà Trưng, Hà Nội").unwrap();
        form.set_field("position", "Nhân viên kho").unwrap();
        form
    }

    #[test]
    fn test_gender_required() {
        let form = filled();
        assert_eq!(form.payload(), Err(FormError::required("gender")));
    }

    #[test]
    fn test_gender_accepts_both_languages() {
        let mut form = filled();
        form.set_field("gender", "Nữ").unwrap();
        assert_eq!(form.gender, Some(Gender::Female));
        form.set_field("gender", "other").unwrap();
        assert_eq!(form.gender, Some(Gender::Other));
        assert!(form.set_field("gender", "robot").is_err());
        assert_eq!(form.gender, Some(Gender::Other));
    }

    #[test]
    fn test_payload_serializes_backend_gender_label() {
        let mut form = filled();
        form.set_field("gender", "male").unwrap();
        let json = serde_json::to_value(form.payload().unwrap()).unwrap();
        assert_eq!(json["gender"], "Nam");
        assert!(json.get("revenue_contribution").is_none());
    }

    #[test]
    fn test_missing_text_field_reported() {
        let mut form = filled();
        form.set_field("gender", "male").unwrap();
        form.set_field("position", "  ").unwrap();
        assert_eq!(form.payload(), Err(FormError::required("position")));
    }
}
