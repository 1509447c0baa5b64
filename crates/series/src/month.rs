//! Calendar month used as the panel time index.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::SeriesError;

/// A calendar month (year + month), the resolution all series are aligned to.
///
/// Provider responses are stamped with full dates; everything downstream of
/// acquisition only cares about the containing month. Ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u8,
}

impl Month {
    /// Creates a new `Month` from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidMonth`] if `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, SeriesError> {
        if !(1..=12).contains(&month) {
            return Err(SeriesError::InvalidMonth { year, month });
        }
        Ok(Self {
            year,
            month: month as u8,
        })
    }

    /// Normalizes a full date to its containing month.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the following month, wrapping December into January.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
