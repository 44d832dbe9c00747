// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar window state for the board grid.
//!
//! The window is transient UI state: a start date plus a fixed span of
//! consecutive days. Moving the window replaces the start date and
//! regenerates the full visible sequence; it is never partially
//! invalidated. Unlike range expansion, the window keeps every day --
//! the grid displays weekends regardless of scheduling eligibility.

use crate::error::DomainError;
use time::{Date, Duration, Weekday};

/// Number of days in the reference board window.
pub const DEFAULT_SPAN: u16 = 21;

/// The contiguous span of dates currently rendered in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    /// First visible day.
    start_date: Date,
    /// Number of visible days.
    span: u16,
}

impl CalendarWindow {
    /// Creates a new `CalendarWindow`.
    ///
    /// # Errors
    ///
    /// Returns an error if `span` is zero.
    pub const fn new(start_date: Date, span: u16) -> Result<Self, DomainError> {
        if span == 0 {
            return Err(DomainError::InvalidWindowSpan { span });
        }
        Ok(Self { start_date, span })
    }

    /// Creates a window with the reference span of 21 days.
    #[must_use]
    pub const fn with_default_span(start_date: Date) -> Self {
        Self {
            start_date,
            span: DEFAULT_SPAN,
        }
    }

    /// Returns the first visible day.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the window span in days.
    #[must_use]
    pub const fn span(&self) -> u16 {
        self.span
    }

    /// Moves the window to a new start date.
    ///
    /// The visible sequence is regenerated in full on the next
    /// `visible_dates` call; no prior dates are retained.
    pub fn move_to(&mut self, new_start: Date) {
        self.start_date = new_start;
    }

    /// Produces the ordered sequence of visible days.
    ///
    /// Every calendar day is included; there is no weekend filtering
    /// here.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn visible_dates(&self) -> Result<Vec<Date>, DomainError> {
        let mut dates: Vec<Date> = Vec::with_capacity(usize::from(self.span));
        let mut current: Date = self.start_date;
        for _ in 0..self.span {
            dates.push(current);
            current = current.checked_add(Duration::days(1)).ok_or_else(|| {
                DomainError::DateArithmeticOverflow {
                    operation: "generating visible window dates".to_string(),
                }
            })?;
        }
        Ok(dates)
    }

    /// Checks whether a date falls inside the window.
    ///
    /// True iff `start_date <= date < start_date + span`. Used to drive
    /// highlight styling in date pickers.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        if date < self.start_date {
            return false;
        }
        match self
            .start_date
            .checked_add(Duration::days(i64::from(self.span)))
        {
            Some(end) => date < end,
            // The window extends past the representable calendar.
            None => true,
        }
    }
}

/// Returns whether a date falls on a Saturday or Sunday.
///
/// Used by the header row to style weekend columns.
#[must_use]
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Returns whether `date` is the same calendar day as `today`.
#[must_use]
pub fn is_today(date: Date, today: Date) -> bool {
    date == today
}
