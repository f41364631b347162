//! Row models and request DTOs, one submodule per table.

pub mod customer;
pub mod dashboard;
pub mod invoice;
pub mod owner;
pub mod reminder;
pub mod report;
