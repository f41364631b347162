//! Domain logic for the salon management backend.
//!
//! Pure computation and validation only -- no I/O, no web types, no
//! database access. The `salon-db` and `salon-api` crates build on top
//! of the types defined here.

pub mod billing;
pub mod error;
pub mod reminders;
pub mod stats;
pub mod types;
pub mod validation;
