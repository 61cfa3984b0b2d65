//! Date formatting port.

use chrono::NaiveDate;

/// Turns calendar dates into card display strings.
///
/// Formatting is one-way: display strings are never parsed back.
pub trait DateFormatter {
    /// Formats a local calendar date, for example `Jan 5, 2025`.
    fn format(&self, date: NaiveDate) -> String;
}
