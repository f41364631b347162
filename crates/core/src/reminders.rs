//! Reminder template rendering and special-date matching.
//!
//! Owners keep one message template per event type with `[CustomerName]`,
//! `[SalonName]`, and `[Event]` placeholders. The matching logic finds
//! customers whose birthday or anniversary comes up within a window of
//! days, ignoring the year the date was originally recorded with.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fallback message used when an owner has not saved a template.
pub const DEFAULT_TEMPLATE: &str =
    "Dear [CustomerName], greetings from [SalonName] on your [Event]!";

/// The kind of customer event a reminder is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Birthday,
    Anniversary,
    /// Catch-all for occasions outside the two tracked dates. Templates can
    /// be saved under it, but no date matching ever produces it.
    Custom,
}

impl EventKind {
    /// Storage key used in the `reminder_templates.event_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Birthday => "birthday",
            EventKind::Anniversary => "anniversary",
            EventKind::Custom => "custom",
        }
    }

    /// Human-readable label substituted for `[Event]`.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Birthday => "birthday",
            EventKind::Anniversary => "anniversary",
            EventKind::Custom => "special day",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "birthday" => Some(EventKind::Birthday),
            "anniversary" => Some(EventKind::Anniversary),
            "custom" => Some(EventKind::Custom),
            _ => None,
        }
    }
}

/// Substitute the template placeholders with concrete values.
pub fn render_template(
    template: &str,
    customer_name: &str,
    salon_name: &str,
    event: EventKind,
) -> String {
    template
        .replace("[CustomerName]", customer_name)
        .replace("[SalonName]", salon_name)
        .replace("[Event]", event.label())
}

/// Next yearly occurrence of `date` on or after `today`, if it falls within
/// the next `days` days (inclusive). The year component of `date` is
/// ignored; Feb 29 anniversaries are observed on Feb 28 in non-leap years.
pub fn upcoming_occurrence(date: NaiveDate, today: NaiveDate, days: u32) -> Option<NaiveDate> {
    let occurrence_in = |year: i32| {
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    };

    let this_year = occurrence_in(today.year())?;
    let occurrence = if this_year < today {
        occurrence_in(today.year() + 1)?
    } else {
        this_year
    };

    let distance = (occurrence - today).num_days();
    (distance <= i64::from(days)).then_some(occurrence)
}
