// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grid-cell lookup for the board.
//!
//! Answers the two per-cell queries -- "is this job scheduled on this
//! day?" and "what are the day's details?" -- and derives the display
//! category for a cell. Comparison is by calendar day only; richer
//! time values are truncated before they reach a lookup.

use crate::types::{OtherIdentifier, ScheduledDate, ScheduledJob};
use std::collections::HashMap;
use time::{Date, PrimitiveDateTime};

/// Checks whether a job has a schedule entry for a calendar day.
#[must_use]
pub fn is_scheduled(job: &ScheduledJob, date: Date) -> bool {
    job.dates().iter().any(|entry| entry.date() == date)
}

/// Checks whether a job is scheduled on the calendar day of a richer
/// time value.
///
/// The time-of-day is discarded before comparison, so a non-midnight
/// timestamp matches a stored day entry.
#[must_use]
pub fn is_scheduled_at(job: &ScheduledJob, moment: PrimitiveDateTime) -> bool {
    is_scheduled(job, moment.date())
}

/// Returns the schedule entry for a calendar day, if any.
#[must_use]
pub fn details_for(job: &ScheduledJob, date: Date) -> Option<&ScheduledDate> {
    job.dates().iter().find(|entry| entry.date() == date)
}

/// Pre-built per-job index of schedule entries by calendar day.
///
/// The linear lookups above are fine for a 21-day window and a handful
/// of jobs; this index gives O(1) per cell when the board grows.
#[derive(Debug)]
pub struct DayIndex<'a> {
    by_day: HashMap<Date, &'a ScheduledDate>,
}

impl<'a> DayIndex<'a> {
    /// Builds the index for one job's schedule.
    #[must_use]
    pub fn build(job: &'a ScheduledJob) -> Self {
        let by_day: HashMap<Date, &'a ScheduledDate> = job
            .dates()
            .iter()
            .map(|entry| (entry.date(), entry))
            .collect();
        Self { by_day }
    }

    /// Checks whether the job is scheduled on a calendar day.
    #[must_use]
    pub fn is_scheduled(&self, date: Date) -> bool {
        self.by_day.contains_key(&date)
    }

    /// Returns the schedule entry for a calendar day, if any.
    #[must_use]
    pub fn details_for(&self, date: Date) -> Option<&'a ScheduledDate> {
        self.by_day.get(&date).copied()
    }
}

/// The display category of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    /// No category; plain cell.
    None,
    /// Time-and-materials billing.
    TimeAndMaterials,
    /// Ten-day notice.
    TenDay,
    /// At least one real operator assignment.
    OperatorAssigned,
}

impl ColorCategory {
    /// Returns the string representation of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::TimeAndMaterials => "TIME_AND_MATERIALS",
            Self::TenDay => "TEN_DAY",
            Self::OperatorAssigned => "OPERATOR_ASSIGNED",
        }
    }
}

impl std::fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derives the display category for a schedule entry.
///
/// The priority order is fixed: time-and-materials wins over ten-day,
/// which wins over operator presence. This order must be preserved
/// exactly for consistent visual semantics.
#[must_use]
pub fn color_category(scheduled_date: &ScheduledDate) -> ColorCategory {
    if scheduled_date
        .identifiers()
        .contains(OtherIdentifier::TimeAndMaterials)
    {
        return ColorCategory::TimeAndMaterials;
    }
    if scheduled_date
        .identifiers()
        .contains(OtherIdentifier::TenDay)
    {
        return ColorCategory::TenDay;
    }
    if scheduled_date.has_active_operator() {
        return ColorCategory::OperatorAssigned;
    }
    ColorCategory::None
}

/// Renders an enum tag as a human label: title-cased, underscores to
/// spaces.
///
/// Works for any tag string, so unknown tags degrade gracefully.
#[must_use]
pub fn display_label(tag: &str) -> String {
    tag.split('_')
        .map(title_case_word)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Returns the compact-cell abbreviation for an identifier tag.
///
/// Unknown tags fall back to the generic underscore-to-space rendering.
#[must_use]
pub fn identifier_abbreviation(tag: &str) -> String {
    match tag {
        "TIME_AND_MATERIALS" => String::from("TM"),
        "TEN_DAY" => String::from("10D"),
        "GRINDING" => String::from("G"),
        other => other.replace('_', " "),
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
    })
}
