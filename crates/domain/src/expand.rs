// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date-range expansion for scheduling submissions.
//!
//! Expands a user-selected inclusive date range into the concrete
//! calendar days to schedule, honoring the weekend-inclusion flags.
//!
//! ## Invariants
//!
//! - Output is ascending with no duplicates.
//! - Weekdays are always kept; Saturdays and Sundays only when their
//!   flag is set.
//! - The expansion is pure: same inputs, same output.

use crate::error::DomainError;
use time::{Date, Duration, Weekday};

/// Expands an inclusive date range into the ordered days to schedule.
///
/// # Arguments
///
/// * `start` - First day of the range (inclusive)
/// * `end` - Last day of the range (inclusive)
/// * `include_saturday` - Keep Saturdays in the expansion
/// * `include_sunday` - Keep Sundays in the expansion
///
/// # Returns
///
/// The ascending sequence of days to schedule. The result is empty only
/// when the range spans solely excluded weekend days.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateRange` if `end` precedes `start`;
/// no partial expansion is attempted.
pub fn expand_range(
    start: Date,
    end: Date,
    include_saturday: bool,
    include_sunday: bool,
) -> Result<Vec<Date>, DomainError> {
    if start > end {
        return Err(DomainError::InvalidDateRange { start, end });
    }

    let mut dates: Vec<Date> = Vec::new();
    let mut current: Date = start;

    loop {
        let keep: bool = match current.weekday() {
            Weekday::Saturday => include_saturday,
            Weekday::Sunday => include_sunday,
            _ => true,
        };
        if keep {
            dates.push(current);
        }

        if current == end {
            break;
        }
        current = current.checked_add(Duration::days(1)).ok_or_else(|| {
            DomainError::DateArithmeticOverflow {
                operation: "expanding date range".to_string(),
            }
        })?;
    }

    Ok(dates)
}
