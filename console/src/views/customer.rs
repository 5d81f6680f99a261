//! Customer screen with an order history panel

use shared::{Customer, CustomerOrder, Language};

use super::crud::{Confirm, CrudView};
use super::ViewContext;
use crate::api::{ApiClient, Resource};
use crate::error::{ConsoleError, ConsoleResult, Operation};

/// Order history of the selected customer
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OrdersPanel {
    #[default]
    Idle,
    Loading {
        customer_id: String,
    },
    Ready {
        customer_id: String,
        orders: Vec<CustomerOrder>,
    },
    Error {
        customer_id: String,
        message: String,
    },
}

impl OrdersPanel {
    pub fn customer_id(&self) -> Option<&str> {
        match self {
            OrdersPanel::Idle => None,
            OrdersPanel::Loading { customer_id }
            | OrdersPanel::Ready { customer_id, .. }
            | OrdersPanel::Error { customer_id, .. } => Some(customer_id),
        }
    }
}

pub struct CustomerView {
    api: ApiClient,
    crud: CrudView<Customer>,
    orders: OrdersPanel,
}

impl CustomerView {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            api: ctx.api.clone(),
            crud: CrudView::new(ctx),
            orders: OrdersPanel::Idle,
        }
    }

    pub fn crud(&self) -> &CrudView<Customer> {
        &self.crud
    }

    pub fn crud_mut(&mut self) -> &mut CrudView<Customer> {
        &mut self.crud
    }

    pub fn orders(&self) -> &OrdersPanel {
        &self.orders
    }

    /// Changing the search text clears the selected customer
    pub fn set_search(&mut self, text: &str) {
        self.orders = OrdersPanel::Idle;
        self.crud.set_search(text);
    }

    /// Select a customer and load their orders
    pub async fn view_orders(&mut self, customer_id: &str) -> ConsoleResult<()> {
        if !self.crud.rows().iter().any(|c| c.id() == customer_id) {
            return Err(ConsoleError::NotFound {
                resource: Customer::NAME,
                id: customer_id.to_string(),
            });
        }

        self.orders = OrdersPanel::Loading {
            customer_id: customer_id.to_string(),
        };
        match self.api.customer_orders(customer_id).await {
            Ok(orders) => {
                tracing::debug!(customer_id, count = orders.len(), "customer orders loaded");
                self.orders = OrdersPanel::Ready {
                    customer_id: customer_id.to_string(),
                    orders,
                };
                Ok(())
            }
            Err(err) => {
                tracing::error!(customer_id, code = err.code(), error = %err, "failed to load customer orders");
                let language = self.crud.language();
                let subject = match language {
                    Language::Vietnamese => "đơn hàng của khách hàng",
                    Language::English => "customer orders",
                };
                self.orders = OrdersPanel::Error {
                    customer_id: customer_id.to_string(),
                    message: err.user_message(Operation::Load, subject, language),
                };
                Err(err)
            }
        }
    }

    /// Delete a customer; the order panel closes if it showed that customer
    pub async fn delete<C: Confirm + ?Sized>(&mut self, id: &str, confirm: &mut C) -> ConsoleResult<bool> {
        let deleted = self.crud.delete(id, confirm).await?;
        if deleted && self.orders.customer_id() == Some(id) {
            self.orders = OrdersPanel::Idle;
        }
        Ok(deleted)
    }
}
