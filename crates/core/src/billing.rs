//! Invoice billing computation.
//!
//! The percentage-based breakdown an invoice is built from: a subtotal over
//! line items, a discount rate applied to the subtotal, and a tax rate
//! applied to the discounted amount. All arithmetic is raw `f64` -- rounding
//! happens only at display time via [`format_amount`].
//!
//! Invoices persist the *rates* plus the final total; the flat currency
//! amounts shown alongside a stored invoice are re-derived from the total
//! with [`BillingBreakdown::from_total`].

use serde::{Deserialize, Serialize};

/// A named, priced unit within an invoice (not separately persisted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    /// Non-negative price. Callers that parse user input default
    /// unparseable values to 0 before constructing the item.
    pub price: f64,
}

/// Full breakdown of one invoice computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BillingBreakdown {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub taxable_amount: f64,
    pub tax_amount: f64,
    pub total: f64,
}

impl BillingBreakdown {
    /// Compute the breakdown from a subtotal and two percentage rates.
    ///
    /// Rates are not clamped: a negative discount produces a surcharge, a
    /// negative tax a rebate. Deterministic for equal inputs.
    pub fn compute(subtotal: f64, discount_rate: f64, tax_rate: f64) -> Self {
        let discount_amount = subtotal * discount_rate / 100.0;
        let taxable_amount = subtotal - discount_amount;
        let tax_amount = taxable_amount * tax_rate / 100.0;
        Self {
            subtotal,
            discount_amount,
            taxable_amount,
            tax_amount,
            total: taxable_amount + tax_amount,
        }
    }

    /// Compute the breakdown for a cart of line items.
    pub fn for_items(items: &[LineItem], discount_rate: f64, tax_rate: f64) -> Self {
        let subtotal = items.iter().map(|item| item.price).sum();
        Self::compute(subtotal, discount_rate, tax_rate)
    }

    /// Recover the breakdown from a stored final total and the stored rates.
    ///
    /// Inverts `total = subtotal * (1 - d/100) * (1 + t/100)`. Degenerate
    /// rate combinations (100% discount, -100% tax) make the total carry no
    /// information about the subtotal; those return an all-zero breakdown
    /// with the total preserved.
    pub fn from_total(total: f64, discount_rate: f64, tax_rate: f64) -> Self {
        let factor = (1.0 - discount_rate / 100.0) * (1.0 + tax_rate / 100.0);
        if factor == 0.0 {
            return Self {
                subtotal: 0.0,
                discount_amount: 0.0,
                taxable_amount: 0.0,
                tax_amount: 0.0,
                total,
            };
        }
        Self::compute(total / factor, discount_rate, tax_rate)
    }
}

/// Format a currency amount for display: two decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
