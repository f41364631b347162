//! One repository per table. Each function performs a single statement
//! against a pool connection -- no cross-request transactions.

pub mod customer_repo;
pub mod dashboard_repo;
pub mod invoice_repo;
pub mod owner_repo;
pub mod reminder_repo;
pub mod report_repo;

pub use customer_repo::CustomerRepo;
pub use dashboard_repo::DashboardRepo;
pub use invoice_repo::InvoiceRepo;
pub use owner_repo::OwnerRepo;
pub use reminder_repo::ReminderRepo;
pub use report_repo::ReportRepo;
