// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory board state.
//!
//! The board holds the last known-good server state: one aggregate per
//! job. Mutations reconcile wholesale -- an aggregate returned by the
//! store replaces any existing entry for the same job; entries are
//! never merged locally.

use crewboard_domain::ScheduledJob;

/// The in-memory collection of scheduled-job aggregates backing the
/// grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    /// All scheduled-job aggregates, one per job.
    pub scheduled_jobs: Vec<ScheduledJob>,
}

impl BoardState {
    /// Creates an empty board state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scheduled_jobs: Vec::new(),
        }
    }

    /// Creates a board state from a server-returned aggregate list.
    #[must_use]
    pub const fn from_scheduled_jobs(scheduled_jobs: Vec<ScheduledJob>) -> Self {
        Self { scheduled_jobs }
    }

    /// Returns the aggregate for a job, if present.
    #[must_use]
    pub fn find_by_job(&self, job_id: i64) -> Option<&ScheduledJob> {
        self.scheduled_jobs
            .iter()
            .find(|entry| entry.job_id() == job_id)
    }

    /// Returns the aggregate with the given identifier, if present.
    #[must_use]
    pub fn find(&self, scheduled_job_id: i64) -> Option<&ScheduledJob> {
        self.scheduled_jobs
            .iter()
            .find(|entry| entry.id() == scheduled_job_id)
    }

    /// Inserts a server-returned aggregate, replacing any existing
    /// entry for the same job wholesale.
    ///
    /// Old dates absent from the new record disappear; nothing is
    /// merged locally.
    pub fn upsert(&mut self, aggregate: ScheduledJob) {
        match self
            .scheduled_jobs
            .iter_mut()
            .find(|entry| entry.job_id() == aggregate.job_id())
        {
            Some(existing) => *existing = aggregate,
            None => self.scheduled_jobs.push(aggregate),
        }
    }

    /// Removes the aggregate with the given identifier.
    ///
    /// Returns whether an entry was removed.
    pub fn remove(&mut self, scheduled_job_id: i64) -> bool {
        let before: usize = self.scheduled_jobs.len();
        self.scheduled_jobs
            .retain(|entry| entry.id() != scheduled_job_id);
        self.scheduled_jobs.len() != before
    }

    /// Returns the number of aggregates on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scheduled_jobs.len()
    }

    /// Returns whether the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scheduled_jobs.is_empty()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
