//! Controlled form state for every editable resource
//!
//! A form holds what the user has typed so far. Numeric fields are stored as
//! numbers and coerced on every edit; `payload` turns the form into the request
//! body, or reports the first field that blocks submission.

mod customer;
mod employee;
mod product;
mod supplier;
mod transaction;

pub use customer::*;
pub use employee::*;
pub use product::*;
pub use supplier::*;
pub use transaction::*;

use serde::Serialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::types::Language;

/// Why a field edit or a submission was refused
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be a number")]
    NotANumber { field: String },

    #[error("{field} must not be negative")]
    Negative { field: String },

    #[error("{field} must be greater than zero")]
    NotPositive { field: String },

    #[error("{field} is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate { field: String },

    #[error("{field}: {message}")]
    Invalid { field: String, message: String },

    #[error("{field} refers to unknown record {id}")]
    UnknownReference { field: String, id: String },

    #[error("unknown field {field}")]
    UnknownField { field: String },
}

impl FormError {
    pub fn required(field: &str) -> Self {
        FormError::Required {
            field: field.to_string(),
        }
    }

    pub fn not_a_number(field: &str) -> Self {
        FormError::NotANumber {
            field: field.to_string(),
        }
    }

    pub fn unknown_field(field: &str) -> Self {
        FormError::UnknownField {
            field: field.to_string(),
        }
    }

    /// Field the error is attached to
    pub fn field(&self) -> &str {
        match self {
            FormError::Required { field }
            | FormError::NotANumber { field }
            | FormError::Negative { field }
            | FormError::NotPositive { field }
            | FormError::InvalidDate { field }
            | FormError::Invalid { field, .. }
            | FormError::UnknownReference { field, .. }
            | FormError::UnknownField { field } => field,
        }
    }

    /// Message shown next to the form
    pub fn localized(&self, language: Language) -> String {
        match language {
            Language::English => self.to_string(),
            Language::Vietnamese => match self {
                FormError::Required { field } => format!("{} là bắt buộc", field),
                FormError::NotANumber { field } => format!("{} phải là số", field),
                FormError::Negative { field } => format!("{} không được âm", field),
                FormError::NotPositive { field } => format!("{} phải lớn hơn 0", field),
                FormError::InvalidDate { field } => {
                    format!("{} không phải ngày hợp lệ (YYYY-MM-DD)", field)
                }
                FormError::Invalid { field, message } => format!("{}: {}", field, message),
                FormError::UnknownReference { field, id } => {
                    format!("{} không tồn tại: {}", field, id)
                }
                FormError::UnknownField { field } => format!("Không có trường {}", field),
            },
        }
    }
}

/// Form state bound to one resource type
pub trait EntityForm: Clone + Default + std::fmt::Debug + Send + Sync + 'static {
    /// Record the form edits
    type Record;
    /// Request body produced on submit
    type Payload: Serialize + Send + Sync;

    /// Field names accepted by `set_field`, in display order
    const FIELDS: &'static [&'static str];

    /// Populate the form from an existing record
    fn from_record(record: &Self::Record) -> Self;

    /// Apply one edit; a rejected edit leaves the previous value in place
    fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError>;

    /// Current value of a field as displayed in the input
    fn field_value(&self, field: &str) -> Option<String>;

    /// Build the request body, or report the first blocking field
    fn payload(&self) -> Result<Self::Payload, FormError>;
}

/// Run derived `validator` rules, reporting the first failing field by name
pub(crate) fn check<T: Validate>(form: &T) -> Result<(), FormError> {
    form.validate().map_err(|errors| first_error(&errors))
}

fn first_error(errors: &ValidationErrors) -> FormError {
    let mut failures: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let code = errs
                .first()
                .map(|e| e.code.to_string())
                .unwrap_or_default();
            (field.to_string(), code)
        })
        .collect();
    failures.sort();

    match failures.into_iter().next() {
        Some((field, code)) if code == "length" => FormError::Required { field },
        Some((field, code)) => FormError::Invalid {
            field,
            message: format!("failed {} check", code),
        },
        None => FormError::Invalid {
            field: "form".to_string(),
            message: "validation failed".to_string(),
        },
    }
}
