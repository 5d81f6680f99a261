//! Supplier models

use serde::{Deserialize, Serialize};

/// A supplier as returned by `GET /suppliers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(rename = "contactPerson")]
    pub contact_person: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub address: String,
}

/// Body of `POST /suppliers` and `PUT /suppliers/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierPayload {
    pub name: String,
    #[serde(rename = "contactPerson")]
    pub contact_person: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
}

impl From<&Supplier> for SupplierPayload {
    fn from(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            contact_person: supplier.contact_person.clone(),
            phone: supplier.phone.clone(),
            email: supplier.email.clone(),
            address: supplier.address.clone(),
        }
    }
}
