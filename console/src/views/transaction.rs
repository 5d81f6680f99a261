//! Import/export screen
//!
//! A collection screen over `/transactions` plus the four lookup collections
//! its form selects from. Lookups and the transaction list load together.

use shared::{
    Customer, Employee, FormMode, Language, Lookups, Product, SelectOption, Supplier, Transaction,
    TransactionForm,
};

use super::crud::{Confirm, CrudView};
use super::ViewContext;
use crate::api::ApiClient;
use crate::error::{ConsoleResult, Operation};

pub struct TransactionView {
    api: ApiClient,
    crud: CrudView<Transaction>,
    lookups: Option<Lookups>,
    lookup_error: Option<String>,
}

impl TransactionView {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            api: ctx.api.clone(),
            crud: CrudView::new(ctx).with_updates(ctx.transaction_updates),
            lookups: None,
            lookup_error: None,
        }
    }

    pub fn crud(&self) -> &CrudView<Transaction> {
        &self.crud
    }

    pub fn crud_mut(&mut self) -> &mut CrudView<Transaction> {
        &mut self.crud
    }

    pub fn lookups(&self) -> Option<&Lookups> {
        self.lookups.as_ref()
    }

    /// Message shown when the lookup collections could not be loaded
    pub fn lookup_error(&self) -> Option<&str> {
        self.lookup_error.as_deref()
    }

    /// Load lookups and the transaction list concurrently
    pub async fn mount(&mut self) {
        let (lookups, ()) = tokio::join!(load_lookups(&self.api), self.crud.fetch());

        match lookups {
            Ok(lookups) => {
                tracing::debug!(
                    products = lookups.products.len(),
                    employees = lookups.employees.len(),
                    suppliers = lookups.suppliers.len(),
                    customers = lookups.customers.len(),
                    "transaction lookups loaded"
                );
                self.lookups = Some(lookups);
                self.lookup_error = None;
            }
            Err(err) => {
                tracing::error!(code = err.code(), error = %err, "failed to load transaction lookups");
                let language = self.crud.language();
                let subject = match language {
                    Language::Vietnamese => "dữ liệu phụ thuộc",
                    Language::English => "reference data",
                };
                self.lookups = None;
                self.lookup_error = Some(err.user_message(Operation::Load, subject, language));
            }
        }
    }

    pub fn unmount(&mut self) {
        self.crud.unmount();
    }

    /// Choices for a reference field of the open form
    ///
    /// The counterparty list follows the form's current type.
    pub fn options(&self, field: &str) -> Vec<SelectOption> {
        let Some(lookups) = &self.lookups else {
            return Vec::new();
        };
        match (field, self.crud.state().form()) {
            ("counterparty", Some((_, form))) => lookups.counterparty_options(form.kind),
            _ => lookups.options(field),
        }
    }

    pub fn open_create(&mut self) {
        self.crud.open_create();
    }

    pub fn open_edit(&mut self, id: &str) -> ConsoleResult<()> {
        self.crud.open_edit(id)
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> ConsoleResult<()> {
        self.crud.set_field(field, value)
    }

    /// Submit the open form; references are checked against loaded lookups
    pub async fn save(&mut self) -> ConsoleResult<()> {
        let lookups = &self.lookups;
        self.crud
            .save_with(|form: &TransactionForm| match lookups {
                Some(lookups) => lookups.submit(form),
                None => shared::EntityForm::payload(form),
            })
            .await
    }

    pub async fn delete<C: Confirm + ?Sized>(&mut self, id: &str, confirm: &mut C) -> ConsoleResult<bool> {
        self.crud.delete(id, confirm).await
    }

    /// Mode of the open form, if any
    pub fn form_mode(&self) -> Option<&FormMode> {
        self.crud.state().form().map(|(mode, _)| mode)
    }
}

/// Fetch the four lookup collections concurrently
pub async fn load_lookups(api: &ApiClient) -> ConsoleResult<Lookups> {
    let (products, employees, suppliers, customers) = tokio::try_join!(
        api.list::<Product>(""),
        api.list::<Employee>(""),
        api.list::<Supplier>(""),
        api.list::<Customer>(""),
    )?;

    Ok(Lookups {
        products,
        employees,
        suppliers,
        customers,
    })
}
