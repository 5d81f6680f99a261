//! Warehouse REST backend access
//!
//! `ApiClient` performs exactly one HTTP call per operation. The four
//! managed collections and the transaction list share one implementation
//! through the `Resource` trait.

mod client;

pub use client::ApiClient;

use serde::de::DeserializeOwned;
use shared::{
    Customer, CustomerForm, Employee, EmployeeForm, EntityForm, Language, Product, ProductForm,
    Supplier, SupplierForm, Transaction, TransactionForm,
};

/// A backend collection with list/create/update/delete endpoints
pub trait Resource: DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Collection path, e.g. `/products`
    const PATH: &'static str;
    /// Singular name used in logs and errors
    const NAME: &'static str;

    type Form: EntityForm<Record = Self>;

    fn id(&self) -> &str;

    /// What the collection is called in user-facing messages
    fn label(language: Language) -> &'static str;
}

impl Resource for Product {
    const PATH: &'static str = "/products";
    const NAME: &'static str = "product";
    type Form = ProductForm;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(language: Language) -> &'static str {
        match language {
            Language::Vietnamese => "sản phẩm",
            Language::English => "products",
        }
    }
}

impl Resource for Employee {
    const PATH: &'static str = "/employees";
    const NAME: &'static str = "employee";
    type Form = EmployeeForm;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(language: Language) -> &'static str {
        match language {
            Language::Vietnamese => "nhân viên",
            Language::English => "employees",
        }
    }
}

impl Resource for Supplier {
    const PATH: &'static str = "/suppliers";
    const NAME: &'static str = "supplier";
    type Form = SupplierForm;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(language: Language) -> &'static str {
        match language {
            Language::Vietnamese => "nhà cung cấp",
            Language::English => "suppliers",
        }
    }
}

impl Resource for Customer {
    const PATH: &'static str = "/customers";
    const NAME: &'static str = "customer";
    type Form = CustomerForm;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(language: Language) -> &'static str {
        match language {
            Language::Vietnamese => "khách hàng",
            Language::English => "customers",
        }
    }
}

impl Resource for Transaction {
    const PATH: &'static str = "/transactions";
    const NAME: &'static str = "transaction";
    type Form = TransactionForm;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(language: Language) -> &'static str {
        match language {
            Language::Vietnamese => "phiếu giao dịch",
            Language::English => "transactions",
        }
    }
}
