//! Warehouse Console
//!
//! Terminal administration console for the warehouse REST backend: product,
//! employee, supplier and customer management, stock import/export, and
//! read-only reports.

pub mod api;
pub mod config;
pub mod debounce;
pub mod error;
pub mod render;
pub mod routes;
pub mod shell;
pub mod views;

pub use config::Config;
pub use error::{ConsoleError, ConsoleResult};
