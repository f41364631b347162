/// All database primary keys are SQLite INTEGER PRIMARY KEY AUTOINCREMENT.
pub type DbId = i64;

/// Timestamps are UTC, as assigned by SQLite `CURRENT_TIMESTAMP`
/// (`YYYY-MM-DD HH:MM:SS`, no offset suffix).
pub type Timestamp = chrono::NaiveDateTime;

/// Calendar dates (birthday, anniversary) with no time component.
pub type Date = chrono::NaiveDate;
