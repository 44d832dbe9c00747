// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scheduled-date normalization.
//!
//! Raw per-date input arrives in the loose shape the scheduling forms
//! and the wire produce: counts may be numbers or free-text strings,
//! the operator field may be absent, a single legacy object, or an
//! array, and identifier tags are plain strings. This module upgrades
//! all of it to the canonical `ScheduledDate` record.
//!
//! ## Invariants
//!
//! - The normalized operator list is never empty; absent input yields
//!   the single sentinel `{type: NONE}` entry.
//! - The identifier set applies the `NONE` mutual-exclusion rule.
//! - Blank or non-numeric operator counts become absent; a count that
//!   parses but is not positive is a validation error.
//! - A crew size that parses but is negative is a validation error;
//!   zero is a valid crew size, distinct from absent.

use crate::error::DomainError;
use crate::types::{
    IdentifierSet, OperatorAssignment, OperatorType, OtherIdentifier, ScheduledDate,
};
use serde::Deserialize;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DAY_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses a calendar day from its wire form (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParse` if the string is not a valid
/// calendar day.
pub fn parse_day(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), DAY_FORMAT).map_err(|e| DomainError::DateParse {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// A count value as it arrives from a form or the wire: either a JSON
/// number or free text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    /// A numeric count.
    Number(i64),
    /// A free-text count, possibly blank or non-numeric.
    Text(String),
}

/// The operator field in raw input.
///
/// Historical payloads carried a single object; the canonical model is
/// the array form. Both are accepted here and upgraded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(untagged)]
pub enum RawOperatorInput {
    /// No operator input.
    #[default]
    Absent,
    /// Legacy single-object form.
    Single(RawOperatorAssignment),
    /// Canonical array form.
    Many(Vec<RawOperatorAssignment>),
}

/// One raw operator entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct RawOperatorAssignment {
    /// The operator type string; blank or absent means `NONE`.
    #[serde(rename = "type")]
    pub operator_type: Option<String>,
    /// The operator headcount.
    pub count: Option<RawCount>,
}

/// Raw per-date input as submitted for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDateInput {
    /// The calendar day (`YYYY-MM-DD`); required for explicit entries,
    /// ignored for range-mode templates.
    pub date: Option<String>,
    /// The crew size.
    pub crew_size: Option<RawCount>,
    /// The operator input in any accepted shape.
    pub operator: RawOperatorInput,
    /// Identifier tag strings.
    pub other_identifier: Vec<String>,
}

/// Normalized per-date attributes without a calendar day.
///
/// Range-mode submissions apply one template to every expanded day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledDateTemplate {
    crew_size: Option<u32>,
    operators: Vec<OperatorAssignment>,
    identifiers: IdentifierSet,
}

impl ScheduledDateTemplate {
    /// Produces a `ScheduledDate` for one calendar day from this
    /// template.
    #[must_use]
    pub fn apply_to(&self, date: Date) -> ScheduledDate {
        ScheduledDate::new(
            date,
            self.crew_size,
            self.operators.clone(),
            self.identifiers.clone(),
        )
    }
}

/// Normalizes the attribute portion of raw input (no date).
///
/// # Errors
///
/// Returns an error if the crew size, an operator entry, or an
/// identifier tag is invalid.
pub fn normalize_template(raw: &RawDateInput) -> Result<ScheduledDateTemplate, DomainError> {
    let crew_size: Option<u32> = normalize_crew_size(raw.crew_size.as_ref())?;
    let operators: Vec<OperatorAssignment> = normalize_operators(&raw.operator)?;
    let identifiers: IdentifierSet = normalize_identifiers(&raw.other_identifier)?;
    Ok(ScheduledDateTemplate {
        crew_size,
        operators,
        identifiers,
    })
}

/// Normalizes one complete raw entry into a canonical `ScheduledDate`.
///
/// # Errors
///
/// Returns an error if the date is missing or unparseable, or if any
/// attribute is invalid.
pub fn normalize(raw: &RawDateInput) -> Result<ScheduledDate, DomainError> {
    let date_value: &str = raw
        .date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(DomainError::MissingDate)?;
    let date: Date = parse_day(date_value)?;
    Ok(normalize_template(raw)?.apply_to(date))
}

/// Normalizes the operator field to the canonical non-empty array form.
///
/// # Errors
///
/// Returns an error if any entry has an unknown type or a non-positive
/// count.
pub fn normalize_operators(
    raw: &RawOperatorInput,
) -> Result<Vec<OperatorAssignment>, DomainError> {
    let entries: Vec<&RawOperatorAssignment> = match raw {
        RawOperatorInput::Absent => Vec::new(),
        RawOperatorInput::Single(entry) => vec![entry],
        RawOperatorInput::Many(entries) => entries.iter().collect(),
    };

    if entries.is_empty() {
        return Ok(vec![OperatorAssignment::none()]);
    }

    entries.into_iter().map(normalize_operator).collect()
}

/// Normalizes identifier tag strings into an `IdentifierSet`.
///
/// Blank tags are skipped; duplicates collapse; the mutual-exclusion
/// rule is applied.
///
/// # Errors
///
/// Returns an error if a non-blank tag is not recognized.
pub fn normalize_identifiers(raw: &[String]) -> Result<IdentifierSet, DomainError> {
    let mut tags: Vec<OtherIdentifier> = Vec::with_capacity(raw.len());
    for value in raw {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        tags.push(OtherIdentifier::parse(trimmed)?);
    }
    Ok(IdentifierSet::from_tags(tags))
}

fn normalize_operator(raw: &RawOperatorAssignment) -> Result<OperatorAssignment, DomainError> {
    let operator_type: OperatorType = match raw.operator_type.as_deref().map(str::trim) {
        None | Some("") => OperatorType::None,
        Some(value) => OperatorType::parse(value)?,
    };
    // A positive count on a NONE assignment is tolerated; display logic
    // ignores it.
    let count: Option<u32> = normalize_count(raw.count.as_ref())?;
    OperatorAssignment::new(operator_type, count)
}

fn normalize_count(raw: Option<&RawCount>) -> Result<Option<u32>, DomainError> {
    let value: i64 = match raw {
        None => return Ok(None),
        Some(RawCount::Number(n)) => *n,
        Some(RawCount::Text(s)) => match s.trim().parse::<i64>() {
            Ok(n) => n,
            // Blank or non-numeric text counts become absent.
            Err(_) => return Ok(None),
        },
    };

    if value <= 0 {
        return Err(DomainError::InvalidOperatorCount { value });
    }
    u32::try_from(value)
        .map(Some)
        .map_err(|_| DomainError::InvalidOperatorCount { value })
}

fn normalize_crew_size(raw: Option<&RawCount>) -> Result<Option<u32>, DomainError> {
    let value: i64 = match raw {
        None => return Ok(None),
        Some(RawCount::Number(n)) => *n,
        Some(RawCount::Text(s)) => {
            let trimmed: &str = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<i64>().map_err(|_| {
                DomainError::InvalidCrewSize(format!(
                    "Crew size must be a whole number, got '{trimmed}'"
                ))
            })?
        }
    };

    if value < 0 {
        return Err(DomainError::InvalidCrewSize(format!(
            "Crew size must be non-negative, got {value}"
        )));
    }
    u32::try_from(value)
        .map(Some)
        .map_err(|_| DomainError::InvalidCrewSize(format!("Crew size out of range: {value}")))
}
