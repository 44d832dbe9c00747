// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use crewboard_domain::{Job, RawDateInput, ScheduledJob};

/// A user-selected date range as it arrives at the API boundary.
///
/// Dates are strings here; they are parsed once, at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeRequest {
    /// First day of the range (`YYYY-MM-DD`, inclusive).
    pub start_date: String,
    /// Last day of the range (`YYYY-MM-DD`, inclusive).
    pub end_date: String,
    /// Keep Saturdays in the expansion.
    pub include_saturday: bool,
    /// Keep Sundays in the expansion.
    pub include_sunday: bool,
}

/// API request to place a job on the schedule.
///
/// Exactly one of `range` and `explicit_dates` must be supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleJobRequest {
    /// The job to schedule.
    pub job_id: i64,
    /// Per-date attribute template (range mode); the date field is
    /// ignored.
    pub template: RawDateInput,
    /// Explicit per-date entries (explicit mode).
    pub explicit_dates: Option<Vec<RawDateInput>>,
    /// Range configuration (range mode).
    pub range: Option<DateRangeRequest>,
}

/// API response for a successful scheduling operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScheduleJobResponse {
    /// The stored aggregate as the store returned it.
    pub scheduled_job: ScheduledJob,
    /// A success message.
    pub message: String,
}

/// API request to replace the dates of an existing scheduled job.
///
/// The same two submission modes apply as for scheduling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateScheduleRequest {
    /// The scheduled-job record to update.
    pub scheduled_job_id: i64,
    /// Per-date attribute template (range mode).
    pub template: RawDateInput,
    /// Explicit per-date entries (explicit mode).
    pub explicit_dates: Option<Vec<RawDateInput>>,
    /// Range configuration (range mode).
    pub range: Option<DateRangeRequest>,
}

/// API response for a successful schedule update.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UpdateScheduleResponse {
    /// The stored aggregate as the store returned it.
    pub scheduled_job: ScheduledJob,
    /// A success message.
    pub message: String,
}

/// API request to remove a job from the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteScheduledJobRequest {
    /// The scheduled-job record to delete.
    pub scheduled_job_id: i64,
}

/// API response for a delete request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DeleteScheduledJobResponse {
    /// Whether the record was actually deleted. `false` means the
    /// confirmation gate declined and nothing changed.
    pub deleted: bool,
    /// A human-readable outcome message.
    pub message: String,
}

/// API response carrying the full board contents.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LoadBoardResponse {
    /// All scheduled-job aggregates, ordered by record id.
    pub scheduled_jobs: Vec<ScheduledJob>,
}

/// API response listing jobs eligible for scheduling.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ListActiveJobsResponse {
    /// The active jobs.
    pub jobs: Vec<Job>,
}
