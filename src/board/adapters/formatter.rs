//! Date formatting adapter.

use chrono::NaiveDate;

use crate::board::ports::DateFormatter;

/// Formats dates as abbreviated month, day and year (`Mar 10, 2025`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortDateFormatter;

impl DateFormatter for ShortDateFormatter {
    fn format(&self, date: NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }
}
