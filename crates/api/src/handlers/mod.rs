//! HTTP request handlers, one module per resource.

pub mod analytics;
pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod invoices;
pub mod profile;
pub mod reminders;
pub mod reports;
pub mod settings;
