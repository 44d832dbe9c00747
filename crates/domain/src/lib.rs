// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod expand;
mod grid;
mod normalize;
mod types;
mod window;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::DomainError;
pub use expand::expand_range;
pub use grid::{
    ColorCategory, DayIndex, color_category, details_for, display_label, identifier_abbreviation,
    is_scheduled, is_scheduled_at,
};
pub use normalize::{
    RawCount, RawDateInput, RawOperatorAssignment, RawOperatorInput, ScheduledDateTemplate,
    normalize, normalize_identifiers, normalize_operators, normalize_template, parse_day,
};
pub use types::{
    IdentifierSet, Job, OperatorAssignment, OperatorType, OtherIdentifier, ScheduledDate,
    ScheduledJob,
};
pub use window::{CalendarWindow, DEFAULT_SPAN, is_today, is_weekend};
