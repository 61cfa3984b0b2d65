//! Due dates, their display strings, and the sort keys derived from them.

use super::BoardDomainError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Ordering key for a task within its column.
///
/// `None` stands for "no concrete date" and sorts after every concrete
/// timestamp. Two absent keys compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortKey(Option<i64>);

impl SortKey {
    /// The key shared by every task without a concrete due date.
    pub const LAST: Self = Self(None);

    /// Creates a key from a millisecond timestamp.
    #[must_use]
    pub const fn at(millis: i64) -> Self {
        Self(Some(millis))
    }

    /// Returns the timestamp, or `None` for [`SortKey::LAST`].
    #[must_use]
    pub const fn millis(self) -> Option<i64> {
        self.0
    }

    /// Returns `true` when this key sorts after every concrete date.
    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0.is_none()
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Due date of a task.
///
/// A scheduled date keeps both the human-readable string shown on the card
/// and the local-midnight timestamp used for ordering. The two sentinels
/// carry no timestamp and always sort last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DueDate {
    /// A concrete calendar date.
    Scheduled {
        /// Locale-formatted display string, for example `Mar 10, 2025`.
        display: String,
        /// Milliseconds since the epoch of local midnight on that date.
        midnight_millis: i64,
    },
    /// The user explicitly ticked "no due date".
    NoDueDate,
    /// The user left the date field empty.
    NotSpecified,
}

impl DueDate {
    /// Display string of the explicit "no due date" sentinel.
    pub const NO_DUE_DATE_LABEL: &'static str = "No Due Date";

    /// Display string of the "left empty" sentinel.
    pub const NOT_SPECIFIED_LABEL: &'static str = "Not specified";

    /// Creates a scheduled due date for `date` with a pre-formatted display
    /// string.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnrepresentableDueDate`] when the date has
    /// no instant on the local timeline near midnight.
    pub fn scheduled(date: NaiveDate, display: impl Into<String>) -> Result<Self, BoardDomainError> {
        Ok(Self::Scheduled {
            display: display.into(),
            midnight_millis: local_midnight_millis(date)?,
        })
    }

    /// Returns the string shown on the task card.
    #[must_use]
    pub fn display(&self) -> &str {
        match self {
            Self::Scheduled { display, .. } => display,
            Self::NoDueDate => Self::NO_DUE_DATE_LABEL,
            Self::NotSpecified => Self::NOT_SPECIFIED_LABEL,
        }
    }

    /// Returns the ordering key.
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        match self {
            Self::Scheduled {
                midnight_millis, ..
            } => SortKey::at(*midnight_millis),
            Self::NoDueDate | Self::NotSpecified => SortKey::LAST,
        }
    }

    /// Reconstructs the calendar date from the stored timestamp.
    ///
    /// The display string is never parsed back.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let Self::Scheduled {
            midnight_millis, ..
        } = self
        else {
            return None;
        };
        DateTime::from_timestamp_millis(*midnight_millis)
            .map(|instant| instant.with_timezone(&Local).date_naive())
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Parses a `YYYY-MM-DD` date input as a local calendar date.
///
/// # Errors
///
/// Returns [`BoardDomainError::InvalidDueDate`] when the input does not name
/// a real calendar date.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, BoardDomainError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| BoardDomainError::InvalidDueDate(raw.to_owned()))
}

/// Formats a calendar date the way a date input expects it (`YYYY-MM-DD`).
#[must_use]
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns the millisecond timestamp of local midnight on `date`.
///
/// Midnight falling inside a daylight-saving gap resolves to the first
/// valid instant within the following hours.
///
/// # Errors
///
/// Returns [`BoardDomainError::UnrepresentableDueDate`] when no instant in
/// the first hours of the day exists locally.
pub fn local_midnight_millis(date: NaiveDate) -> Result<i64, BoardDomainError> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=3)
        .filter_map(|hours| midnight.checked_add_signed(TimeDelta::hours(hours)))
        .find_map(|candidate: NaiveDateTime| Local.from_local_datetime(&candidate).earliest())
        .map(|instant| instant.timestamp_millis())
        .ok_or_else(|| BoardDomainError::UnrepresentableDueDate(format_calendar_date(date)))
}
