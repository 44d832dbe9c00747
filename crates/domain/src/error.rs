// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The end of a date range precedes its start.
    InvalidDateRange {
        /// The requested start date.
        start: Date,
        /// The requested end date.
        end: Date,
    },
    /// Crew size is present but not a valid non-negative integer.
    InvalidCrewSize(String),
    /// Operator count is present but not positive.
    InvalidOperatorCount {
        /// The invalid count value.
        value: i64,
    },
    /// Operator type string is not recognized.
    InvalidOperatorType(String),
    /// Identifier tag string is not recognized.
    InvalidIdentifier(String),
    /// A scheduled date entry is missing its calendar date.
    MissingDate,
    /// Failed to parse a calendar day from a string.
    DateParse {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A job carries two scheduled dates for the same calendar day.
    DuplicateScheduledDate {
        /// The duplicated calendar day.
        date: Date,
    },
    /// Calendar window span must be at least one day.
    InvalidWindowSpan {
        /// The invalid span value.
        span: u16,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange { start, end } => {
                write!(f, "End date {end} precedes start date {start}")
            }
            Self::InvalidCrewSize(msg) => write!(f, "Invalid crew size: {msg}"),
            Self::InvalidOperatorCount { value } => {
                write!(f, "Operator count must be positive, got {value}")
            }
            Self::InvalidOperatorType(value) => {
                write!(f, "Unknown operator type: {value}")
            }
            Self::InvalidIdentifier(value) => {
                write!(f, "Unknown identifier tag: {value}")
            }
            Self::MissingDate => {
                write!(f, "Scheduled date entry is missing its calendar date")
            }
            Self::DateParse { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DuplicateScheduledDate { date } => {
                write!(f, "Job already has a scheduled date for {date}")
            }
            Self::InvalidWindowSpan { span } => {
                write!(f, "Calendar window span must be at least 1 day, got {span}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
