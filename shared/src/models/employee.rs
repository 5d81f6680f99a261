//! Employee models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Employee gender, stored by the backend under its Vietnamese label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[serde(rename = "Nam", alias = "male")]
    Male,
    #[serde(rename = "Nữ", alias = "female")]
    Female,
    #[serde(rename = "Khác", alias = "other")]
    Other,
}

impl Gender {
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Gender::Male, Language::Vietnamese) => "Nam",
            (Gender::Female, Language::Vietnamese) => "Nữ",
            (Gender::Other, Language::Vietnamese) => "Khác",
            (Gender::Male, Language::English) => "Male",
            (Gender::Female, Language::English) => "Female",
            (Gender::Other, Language::English) => "Other",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "nam" => Ok(Gender::Male),
            "female" | "f" | "nữ" | "nu" => Ok(Gender::Female),
            "other" | "khác" | "khac" => Ok(Gender::Other),
            _ => Err(()),
        }
    }
}

/// An employee as returned by `GET /employees`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub phone: String,
    pub address: String,
    pub position: String,
    /// Sum of export value handled by this employee, maintained by the backend
    #[serde(default, with = "rust_decimal::serde::float")]
    pub revenue_contribution: Decimal,
}

/// Body of `POST /employees` and `PUT /employees/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    pub gender: Gender,
    pub phone: String,
    pub address: String,
    pub position: String,
}

impl From<&Employee> for EmployeePayload {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            gender: employee.gender,
            phone: employee.phone.clone(),
            address: employee.address.clone(),
            position: employee.position.clone(),
        }
    }
}
