// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crewboard::CoreError;
use crewboard_domain::DomainError;
use crewboard_store::StoreError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The remote schedule store could not be reached.
    RemoteFailure {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::RemoteFailure { message } => {
                write!(f, "Schedule store unreachable: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDateRange { start, end } => ApiError::InvalidInput {
            field: String::from("dateRange"),
            message: format!("End date {end} precedes start date {start}"),
        },
        DomainError::InvalidCrewSize(msg) => ApiError::InvalidInput {
            field: String::from("crewSize"),
            message: msg,
        },
        DomainError::InvalidOperatorCount { value } => ApiError::InvalidInput {
            field: String::from("operator.count"),
            message: format!("Operator count must be positive, got {value}"),
        },
        DomainError::InvalidOperatorType(value) => ApiError::InvalidInput {
            field: String::from("operator.type"),
            message: format!("Unknown operator type: {value}"),
        },
        DomainError::InvalidIdentifier(value) => ApiError::InvalidInput {
            field: String::from("otherIdentifier"),
            message: format!("Unknown identifier tag: {value}"),
        },
        DomainError::MissingDate => ApiError::InvalidInput {
            field: String::from("date"),
            message: String::from("Each scheduled date entry requires a calendar day"),
        },
        DomainError::DateParse { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DuplicateScheduledDate { date } => ApiError::DomainRuleViolation {
            rule: String::from("one_entry_per_day"),
            message: format!("Job already has a scheduled date for {date}"),
        },
        DomainError::InvalidWindowSpan { span } => ApiError::InvalidInput {
            field: String::from("span"),
            message: format!("Calendar window span must be at least 1 day, got {span}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::ModeConflict => ApiError::InvalidInput {
            field: String::from("dates"),
            message: String::from(
                "Supply either a date range or explicit dates, not both",
            ),
        },
        CoreError::NoDatesSelected => ApiError::InvalidInput {
            field: String::from("dates"),
            message: String::from("At least one scheduled date is required"),
        },
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { scheduled_job_id } => Self::ResourceNotFound {
                resource_type: String::from("Scheduled job"),
                message: format!("No scheduled job with id {scheduled_job_id}"),
            },
            StoreError::Rejected(message) => Self::DomainRuleViolation {
                rule: String::from("store_rejected"),
                message,
            },
            StoreError::Unreachable(message) => Self::RemoteFailure { message },
            StoreError::Codec(err) => Self::Internal {
                message: format!("Record codec error: {err}"),
            },
            StoreError::Invalid(domain_err) => translate_domain_error(domain_err),
        }
    }
}
