//! Wire models for the warehouse REST backend

mod customer;
mod employee;
mod product;
mod report;
mod supplier;
mod transaction;

pub use customer::*;
pub use employee::*;
pub use product::*;
pub use report::*;
pub use supplier::*;
pub use transaction::*;
