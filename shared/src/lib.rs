//! Shared types and models for the Warehouse Console
//!
//! This crate contains the wire models, form state and field rules shared
//! between the terminal console and the browser front end (via WASM).

pub mod format;
pub mod forms;
pub mod models;
pub mod types;
pub mod validation;

pub use format::*;
pub use forms::*;
pub use models::*;
pub use types::*;
pub use validation::*;
