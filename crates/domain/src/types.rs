// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical scheduling domain model.
//!
//! ## Invariants
//!
//! - A `ScheduledDate` always carries at least one operator assignment;
//!   an unassigned date holds the single sentinel `{type: NONE}` entry.
//! - An `IdentifierSet` is never empty, and `NONE` never coexists with a
//!   real tag.
//! - A `ScheduledJob` holds at most one `ScheduledDate` per calendar day.
//! - Dates are day-granular (`time::Date`); richer time values are
//!   truncated at the boundary before they reach these types.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(calendar_day, Date, "[year]-[month]-[day]");

/// Represents a job that can be placed on the board.
///
/// Jobs are owned by the external job-management collaborator.
/// The scheduling core references them and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// The job's canonical numeric identifier.
    pub id: i64,
    /// The job's display name.
    #[serde(rename = "jobName")]
    pub name: String,
    /// Optional job number.
    #[serde(rename = "jobNum")]
    pub number: Option<String>,
    /// Whether the job is active and eligible for scheduling.
    pub active: bool,
}

impl Job {
    /// Creates a new `Job`.
    #[must_use]
    pub const fn new(id: i64, name: String, number: Option<String>, active: bool) -> Self {
        Self {
            id,
            name,
            number,
            active,
        }
    }
}

/// Represents an equipment-operator type.
///
/// Operator types are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatorType {
    /// No operator assigned (sentinel).
    #[default]
    None,
    /// Full-size equipment operator.
    Full,
    /// Bobcat operator.
    Bobcat,
    /// Dozer operator.
    Dozer,
}

impl OperatorType {
    /// Parses an operator type from its wire string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid operator type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "NONE" => Ok(Self::None),
            "FULL" => Ok(Self::Full),
            "BOBCAT" => Ok(Self::Bobcat),
            "DOZER" => Ok(Self::Dozer),
            _ => Err(DomainError::InvalidOperatorType(s.to_string())),
        }
    }

    /// Returns the wire string representation of this operator type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Full => "FULL",
            Self::Bobcat => "BOBCAT",
            Self::Dozer => "DOZER",
        }
    }
}

/// Represents a categorical identifier tag on a scheduled date.
///
/// Tags modify billing/scheduling treatment of the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OtherIdentifier {
    /// No identifier (sentinel, mutually exclusive with real tags).
    #[default]
    None,
    /// Time-and-materials billing.
    TimeAndMaterials,
    /// Ten-day notice.
    TenDay,
    /// Grinding work.
    Grinding,
}

impl OtherIdentifier {
    /// Parses an identifier tag from its wire string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid tag.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "NONE" => Ok(Self::None),
            "TIME_AND_MATERIALS" => Ok(Self::TimeAndMaterials),
            "TEN_DAY" => Ok(Self::TenDay),
            "GRINDING" => Ok(Self::Grinding),
            _ => Err(DomainError::InvalidIdentifier(s.to_string())),
        }
    }

    /// Returns the wire string representation of this tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::TimeAndMaterials => "TIME_AND_MATERIALS",
            Self::TenDay => "TEN_DAY",
            Self::Grinding => "GRINDING",
        }
    }
}

/// Represents an equipment-operator requirement for a scheduled date.
///
/// `count` is only meaningful when the type is not `NONE`; a count on a
/// `NONE` assignment is tolerated but ignored by display logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatorAssignment {
    /// The operator type.
    #[serde(rename = "type")]
    operator_type: OperatorType,
    /// Optional operator headcount (positive).
    count: Option<u32>,
}

impl OperatorAssignment {
    /// Creates the sentinel unassigned entry.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            operator_type: OperatorType::None,
            count: None,
        }
    }

    /// Creates a new `OperatorAssignment`.
    ///
    /// # Errors
    ///
    /// Returns an error if a count is present but zero.
    pub const fn new(operator_type: OperatorType, count: Option<u32>) -> Result<Self, DomainError> {
        if let Some(0) = count {
            return Err(DomainError::InvalidOperatorCount { value: 0 });
        }
        Ok(Self {
            operator_type,
            count,
        })
    }

    /// Returns the operator type.
    #[must_use]
    pub const fn operator_type(&self) -> OperatorType {
        self.operator_type
    }

    /// Returns the operator headcount if set.
    #[must_use]
    pub const fn count(&self) -> Option<u32> {
        self.count
    }

    /// Returns whether this assignment names a real operator.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.operator_type != OperatorType::None
    }
}

/// Represents the set of identifier tags on a scheduled date.
///
/// The set is ordered (stable for rendering), duplicate-free, and never
/// empty: adding a real tag removes `NONE`, and removing the last real
/// tag restores `NONE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdentifierSet {
    tags: Vec<OtherIdentifier>,
}

impl IdentifierSet {
    /// Creates the sentinel-only set `[NONE]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tags: vec![OtherIdentifier::None],
        }
    }

    /// Builds a set from raw tags, applying the mutual-exclusion rule.
    ///
    /// Duplicates are dropped, first occurrence wins for ordering, and a
    /// `NONE` in the input is ignored unless it stands alone.
    #[must_use]
    pub fn from_tags(tags: impl IntoIterator<Item = OtherIdentifier>) -> Self {
        let mut set: Self = Self::new();
        for tag in tags {
            set.insert(tag);
        }
        set
    }

    /// Adds a real tag to the set, displacing the `NONE` sentinel.
    ///
    /// Inserting `NONE` is a no-op: the sentinel is managed internally.
    pub fn insert(&mut self, tag: OtherIdentifier) {
        if tag == OtherIdentifier::None {
            return;
        }
        self.tags.retain(|t| *t != OtherIdentifier::None);
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Removes a real tag; restores `NONE` when the set would be empty.
    ///
    /// Removing `NONE` is a no-op.
    pub fn remove(&mut self, tag: OtherIdentifier) {
        if tag == OtherIdentifier::None {
            return;
        }
        self.tags.retain(|t| *t != tag);
        if self.tags.is_empty() {
            self.tags.push(OtherIdentifier::None);
        }
    }

    /// Toggles a real tag on or off.
    pub fn toggle(&mut self, tag: OtherIdentifier) {
        if self.contains(tag) {
            self.remove(tag);
        } else {
            self.insert(tag);
        }
    }

    /// Checks whether the set contains a tag.
    #[must_use]
    pub fn contains(&self, tag: OtherIdentifier) -> bool {
        self.tags.contains(&tag)
    }

    /// Returns the tags in stable rendering order.
    #[must_use]
    pub fn tags(&self) -> &[OtherIdentifier] {
        &self.tags
    }

    /// Returns whether the set holds only the `NONE` sentinel.
    #[must_use]
    pub fn is_none_only(&self) -> bool {
        self.tags == [OtherIdentifier::None]
    }
}

impl Default for IdentifierSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Represents one calendar day's schedule entry for a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledDate {
    /// The calendar day (day granularity).
    #[serde(with = "calendar_day")]
    date: Date,
    /// Optional crew size (non-negative; zero is valid and distinct
    /// from absent).
    crew_size: Option<u32>,
    /// Operator assignments; never empty.
    operator: Vec<OperatorAssignment>,
    /// Identifier tags; never empty.
    other_identifier: IdentifierSet,
}

impl ScheduledDate {
    /// Creates a new `ScheduledDate`.
    ///
    /// An empty operator list is upgraded to the canonical single-entry
    /// sentinel form.
    #[must_use]
    pub fn new(
        date: Date,
        crew_size: Option<u32>,
        operator: Vec<OperatorAssignment>,
        other_identifier: IdentifierSet,
    ) -> Self {
        let operator: Vec<OperatorAssignment> = if operator.is_empty() {
            vec![OperatorAssignment::none()]
        } else {
            operator
        };
        Self {
            date,
            crew_size,
            operator,
            other_identifier,
        }
    }

    /// Returns the calendar day.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the crew size if set.
    #[must_use]
    pub const fn crew_size(&self) -> Option<u32> {
        self.crew_size
    }

    /// Returns the operator assignments.
    #[must_use]
    pub fn operators(&self) -> &[OperatorAssignment] {
        &self.operator
    }

    /// Returns the identifier tags.
    #[must_use]
    pub const fn identifiers(&self) -> &IdentifierSet {
        &self.other_identifier
    }

    /// Returns whether any assignment names a real operator.
    #[must_use]
    pub fn has_active_operator(&self) -> bool {
        self.operator.iter().any(OperatorAssignment::is_active)
    }
}

/// Represents a job plus the full set of its scheduled dates.
///
/// The aggregate is replaced wholesale on mutation; it is never merged
/// entry by entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledJob {
    /// The aggregate's canonical identifier assigned by the store.
    id: i64,
    /// The job this schedule belongs to.
    job: Job,
    /// The scheduled dates, ascending, at most one per calendar day.
    dates: Vec<ScheduledDate>,
}

impl ScheduledJob {
    /// Creates a new `ScheduledJob`.
    ///
    /// Dates are sorted ascending by calendar day.
    ///
    /// # Errors
    ///
    /// Returns an error if two entries share the same calendar day.
    /// Duplicate days are a caller error, never silently merged.
    pub fn new(id: i64, job: Job, mut dates: Vec<ScheduledDate>) -> Result<Self, DomainError> {
        dates.sort_by_key(ScheduledDate::date);
        for pair in dates.windows(2) {
            if pair[0].date() == pair[1].date() {
                return Err(DomainError::DuplicateScheduledDate {
                    date: pair[0].date(),
                });
            }
        }
        Ok(Self { id, job, dates })
    }

    /// Returns the aggregate identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the job reference.
    #[must_use]
    pub const fn job(&self) -> &Job {
        &self.job
    }

    /// Returns the job's identifier.
    #[must_use]
    pub const fn job_id(&self) -> i64 {
        self.job.id
    }

    /// Returns the scheduled dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[ScheduledDate] {
        &self.dates
    }
}
