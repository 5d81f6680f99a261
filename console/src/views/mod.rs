//! Screens of the console
//!
//! One `View` is active at a time. It owns everything it fetched; nothing is
//! shared between screens.

pub mod crud;
pub mod customer;
pub mod report;
pub mod state;
pub mod transaction;

pub use crud::{Confirm, CrudView};
pub use customer::{CustomerView, OrdersPanel};
pub use report::{ReportData, ReportKind, ReportState, ReportView};
pub use state::ViewState;
pub use transaction::TransactionView;

use std::time::Duration;

use shared::{Employee, Language, Product, Supplier};

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{ConsoleError, ConsoleResult, Operation};

/// Settings every view is built from
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub api: ApiClient,
    pub language: Language,
    pub debounce: Duration,
    pub transaction_updates: bool,
}

impl ViewContext {
    pub fn from_config(config: &Config) -> ConsoleResult<Self> {
        Ok(Self {
            api: ApiClient::new(&config.api)?,
            language: config.ui.language,
            debounce: config.debounce_delay(),
            transaction_updates: config.api.transaction_updates,
        })
    }
}

/// The active screen
pub enum View {
    Products(CrudView<Product>),
    Employees(CrudView<Employee>),
    Suppliers(CrudView<Supplier>),
    Customers(CustomerView),
    Transactions(TransactionView),
    Report(ReportView),
    NotFound { path: String, language: Language },
}

impl View {
    pub(crate) fn unsupported(&self, operation: &'static str) -> ConsoleError {
        let resource = match self {
            View::Report(_) => "report",
            _ => "page",
        };
        ConsoleError::Unsupported {
            resource,
            operation,
        }
    }

    pub async fn mount(&mut self) {
        match self {
            View::Products(v) => v.mount().await,
            View::Employees(v) => v.mount().await,
            View::Suppliers(v) => v.mount().await,
            View::Customers(v) => v.crud_mut().mount().await,
            View::Transactions(v) => v.mount().await,
            View::Report(v) => v.mount().await,
            View::NotFound { .. } => {}
        }
    }

    /// Cancel pending timers before the view is dropped or replaced
    pub fn unmount(&mut self) {
        match self {
            View::Products(v) => v.unmount(),
            View::Employees(v) => v.unmount(),
            View::Suppliers(v) => v.unmount(),
            View::Customers(v) => v.crud_mut().unmount(),
            View::Transactions(v) => v.unmount(),
            View::Report(_) | View::NotFound { .. } => {}
        }
    }

    pub fn set_search(&mut self, text: &str) -> ConsoleResult<()> {
        match self {
            View::Products(v) => v.set_search(text),
            View::Employees(v) => v.set_search(text),
            View::Suppliers(v) => v.set_search(text),
            View::Customers(v) => v.set_search(text),
            View::Transactions(v) => v.crud_mut().set_search(text),
            View::Report(_) | View::NotFound { .. } => return Err(self.unsupported("search")),
        }
        Ok(())
    }

    /// Resolves when a debounced search is due; never for views without search
    pub async fn search_due(&mut self) -> String {
        match self {
            View::Products(v) => v.search_due().await,
            View::Employees(v) => v.search_due().await,
            View::Suppliers(v) => v.search_due().await,
            View::Customers(v) => v.crud_mut().search_due().await,
            View::Transactions(v) => v.crud_mut().search_due().await,
            View::Report(_) | View::NotFound { .. } => std::future::pending().await,
        }
    }

    /// Fetch for the current search text
    pub async fn fetch(&mut self) {
        match self {
            View::Products(v) => v.fetch().await,
            View::Employees(v) => v.fetch().await,
            View::Suppliers(v) => v.fetch().await,
            View::Customers(v) => v.crud_mut().fetch().await,
            View::Transactions(v) => v.crud_mut().fetch().await,
            View::Report(_) | View::NotFound { .. } => {}
        }
    }

    pub async fn refresh(&mut self) {
        match self {
            View::Products(v) => v.refresh().await,
            View::Employees(v) => v.refresh().await,
            View::Suppliers(v) => v.refresh().await,
            View::Customers(v) => v.crud_mut().refresh().await,
            View::Transactions(v) => v.crud_mut().refresh().await,
            View::Report(v) => v.mount().await,
            View::NotFound { .. } => {}
        }
    }

    pub fn open_create(&mut self) -> ConsoleResult<()> {
        match self {
            View::Products(v) => v.open_create(),
            View::Employees(v) => v.open_create(),
            View::Suppliers(v) => v.open_create(),
            View::Customers(v) => v.crud_mut().open_create(),
            View::Transactions(v) => v.open_create(),
            View::Report(_) | View::NotFound { .. } => return Err(self.unsupported("create")),
        }
        Ok(())
    }

    pub fn open_edit(&mut self, id: &str) -> ConsoleResult<()> {
        match self {
            View::Products(v) => v.open_edit(id),
            View::Employees(v) => v.open_edit(id),
            View::Suppliers(v) => v.open_edit(id),
            View::Customers(v) => v.crud_mut().open_edit(id),
            View::Transactions(v) => v.open_edit(id),
            View::Report(_) | View::NotFound { .. } => Err(self.unsupported("update")),
        }
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> ConsoleResult<()> {
        match self {
            View::Products(v) => v.set_field(field, value),
            View::Employees(v) => v.set_field(field, value),
            View::Suppliers(v) => v.set_field(field, value),
            View::Customers(v) => v.crud_mut().set_field(field, value),
            View::Transactions(v) => v.set_field(field, value),
            View::Report(_) | View::NotFound { .. } => Err(ConsoleError::NoForm),
        }
    }

    pub async fn save(&mut self) -> ConsoleResult<()> {
        match self {
            View::Products(v) => v.save().await,
            View::Employees(v) => v.save().await,
            View::Suppliers(v) => v.save().await,
            View::Customers(v) => v.crud_mut().save().await,
            View::Transactions(v) => v.save().await,
            View::Report(_) | View::NotFound { .. } => Err(ConsoleError::NoForm),
        }
    }

    /// Close the open form, or dismiss the error panel
    pub fn cancel(&mut self) {
        match self {
            View::Products(v) => {
                v.cancel_form();
                v.dismiss_error();
            }
            View::Employees(v) => {
                v.cancel_form();
                v.dismiss_error();
            }
            View::Suppliers(v) => {
                v.cancel_form();
                v.dismiss_error();
            }
            View::Customers(v) => {
                v.crud_mut().cancel_form();
                v.crud_mut().dismiss_error();
            }
            View::Transactions(v) => {
                v.crud_mut().cancel_form();
                v.crud_mut().dismiss_error();
            }
            View::Report(_) | View::NotFound { .. } => {}
        }
    }

    /// Confirmation question for deleting `id`, if this view deletes records
    pub fn delete_prompt(&self, id: &str) -> ConsoleResult<String> {
        match self {
            View::Products(v) => v.delete_prompt(id),
            View::Employees(v) => v.delete_prompt(id),
            View::Suppliers(v) => v.delete_prompt(id),
            View::Customers(v) => v.crud().delete_prompt(id),
            View::Transactions(v) => v.crud().delete_prompt(id),
            View::Report(_) | View::NotFound { .. } => Err(self.unsupported("delete")),
        }
    }

    pub async fn delete<C: Confirm + ?Sized>(&mut self, id: &str, confirm: &mut C) -> ConsoleResult<bool> {
        match self {
            View::Products(v) => v.delete(id, confirm).await,
            View::Employees(v) => v.delete(id, confirm).await,
            View::Suppliers(v) => v.delete(id, confirm).await,
            View::Customers(v) => v.delete(id, confirm).await,
            View::Transactions(v) => v.delete(id, confirm).await,
            View::Report(_) | View::NotFound { .. } => Err(self.unsupported("delete")),
        }
    }

    pub async fn view_orders(&mut self, customer_id: &str) -> ConsoleResult<()> {
        match self {
            View::Customers(v) => v.view_orders(customer_id).await,
            _ => Err(self.unsupported("orders")),
        }
    }

    pub fn language(&self) -> Language {
        match self {
            View::Products(v) => v.language(),
            View::Employees(v) => v.language(),
            View::Suppliers(v) => v.language(),
            View::Customers(v) => v.crud().language(),
            View::Transactions(v) => v.crud().language(),
            View::Report(v) => v.language(),
            View::NotFound { language, .. } => *language,
        }
    }

    /// User-facing message for an error a command on this view returned
    pub fn explain(&self, err: &ConsoleError, operation: Operation) -> String {
        let language = self.language();
        let subject = match self {
            View::Products(v) => v.label(),
            View::Employees(v) => v.label(),
            View::Suppliers(v) => v.label(),
            View::Customers(v) => v.crud().label(),
            View::Transactions(v) => v.crud().label(),
            View::Report(v) => v.kind().title(language),
            View::NotFound { path, .. } => path.as_str(),
        };
        err.user_message(operation, subject, language)
    }
}
