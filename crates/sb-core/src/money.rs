//! Currency rounding for fee amounts.
//!
//! Fees are stored as SQLite REAL columns. Derived amounts shown to the
//! user (the outstanding balance) are rounded to two decimal places at
//! read time and never stored.

/// Round a currency amount to two decimal places, half away from zero.
#[must_use]
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Outstanding balance for a student: tuition fee minus fees paid.
#[must_use]
pub fn balance(tuition_fee: f64, fees_paid: f64) -> f64 {
    round_currency(tuition_fee - fees_paid)
}
