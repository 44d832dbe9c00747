// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule assembly for one job's submission.
//!
//! Combines the date-range expander with the normalizer to produce the
//! full list of `ScheduledDate` records submitted in one request.
//!
//! Two modes, selected explicitly by the caller:
//! - Range mode: expand the range, apply one normalized template to
//!   every expanded day.
//! - Explicit mode: normalize each entry independently with its own
//!   date and attributes.
//!
//! Assembly is all-or-nothing: any malformed entry rejects the whole
//! submission before anything reaches the store.

use crate::error::CoreError;
use crewboard_domain::{
    RawDateInput, ScheduledDate, ScheduledDateTemplate, expand_range, normalize,
    normalize_template,
};
use std::collections::HashSet;
use time::Date;

/// A user-selected date range plus weekend-inclusion flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeConfig {
    /// First day of the range (inclusive).
    pub start: Date,
    /// Last day of the range (inclusive).
    pub end: Date,
    /// Keep Saturdays in the expansion.
    pub include_saturday: bool,
    /// Keep Sundays in the expansion.
    pub include_sunday: bool,
}

/// One job's schedule submission before assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleRequest {
    /// The job being scheduled.
    pub job_id: i64,
    /// Per-date attribute template; the date field is ignored in range
    /// mode.
    pub template: RawDateInput,
    /// Explicit per-date entries (explicit mode).
    pub explicit_dates: Option<Vec<RawDateInput>>,
    /// Range configuration (range mode).
    pub range: Option<RangeConfig>,
}

/// Assembles the full list of scheduled dates for one submission.
///
/// # Errors
///
/// - `CoreError::ModeConflict` if both modes are supplied
/// - `CoreError::NoDatesSelected` if neither mode is supplied
/// - `CoreError::DomainViolation` on any invalid range, date, or
///   attribute; the whole assembly is rejected
pub fn assemble(request: &AssembleRequest) -> Result<Vec<ScheduledDate>, CoreError> {
    match (&request.range, &request.explicit_dates) {
        (Some(_), Some(_)) => Err(CoreError::ModeConflict),
        (Some(range), None) => assemble_range(&request.template, range),
        (None, Some(explicit_dates)) => assemble_explicit(explicit_dates),
        (None, None) => Err(CoreError::NoDatesSelected),
    }
}

fn assemble_range(
    template: &RawDateInput,
    range: &RangeConfig,
) -> Result<Vec<ScheduledDate>, CoreError> {
    let days: Vec<Date> = expand_range(
        range.start,
        range.end,
        range.include_saturday,
        range.include_sunday,
    )?;
    let template: ScheduledDateTemplate = normalize_template(template)?;

    Ok(days.into_iter().map(|day| template.apply_to(day)).collect())
}

fn assemble_explicit(entries: &[RawDateInput]) -> Result<Vec<ScheduledDate>, CoreError> {
    if entries.is_empty() {
        return Err(CoreError::NoDatesSelected);
    }

    let mut seen: HashSet<Date> = HashSet::with_capacity(entries.len());
    let mut dates: Vec<ScheduledDate> = Vec::with_capacity(entries.len());

    for entry in entries {
        let scheduled: ScheduledDate = normalize(entry)?;
        if !seen.insert(scheduled.date()) {
            return Err(CoreError::DomainViolation(
                crewboard_domain::DomainError::DuplicateScheduledDate {
                    date: scheduled.date(),
                },
            ));
        }
        dates.push(scheduled);
    }

    Ok(dates)
}
