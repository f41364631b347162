//! SQLite persistence for the salon management backend.
//!
//! One file-backed store, auto-created on first startup. The schema is
//! bootstrapped with idempotent `CREATE TABLE IF NOT EXISTS` statements --
//! there is no migration framework; schema changes are manual.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

/// Shared connection pool type used across the workspace.
pub type DbPool = sqlx::SqlitePool;

/// Default pool size. Writes are serialized by SQLite anyway; a handful of
/// connections covers concurrent readers at single-salon scale.
const MAX_CONNECTIONS: u32 = 5;

/// Open (and create, if missing) the SQLite database at `database_url`.
///
/// Accepts `sqlite://path/to/salon.db` or `sqlite::memory:`.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Cheap connectivity probe used by the health endpoint and at startup.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create all tables if they do not exist yet.
///
/// `invoices.customer_id` carries no foreign key on purpose (sqlx turns
/// `PRAGMA foreign_keys` on by default, so a declared one would be
/// enforced): deleting a customer leaves the invoice row in place and
/// listing joins resolve the name to NULL.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    const STATEMENTS: &[&str] = &[
        "CREATE TABLE IF NOT EXISTS owners (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            phone TEXT,
            password_hash TEXT NOT NULL,
            salon_name TEXT NOT NULL,
            address TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        "CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone TEXT,
            email TEXT,
            birthday DATE,
            anniversary DATE,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        "CREATE TABLE IF NOT EXISTS invoices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            customer_id INTEGER,
            total_amount REAL NOT NULL,
            discount REAL NOT NULL DEFAULT 0,
            tax REAL NOT NULL DEFAULT 0,
            payment_status TEXT NOT NULL DEFAULT 'Unpaid',
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        "CREATE TABLE IF NOT EXISTS reminder_templates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_id INTEGER NOT NULL,
            event_type TEXT NOT NULL,
            template TEXT NOT NULL,
            UNIQUE(owner_id, event_type)
        )",
    ];

    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::debug!("Schema bootstrap complete");
    Ok(())
}
