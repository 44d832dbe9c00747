// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule store abstraction for the Crewboard scheduling board.
//!
//! The `ScheduleStore` trait is the seam between the scheduling core
//! and whatever holds the records: a remote service in production, the
//! in-memory backend here for development and tests. Records cross the
//! seam in the wire JSON shape; reads come back through the normalizer
//! so legacy payloads are upgraded rather than rejected.

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
mod memory;
mod wire;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use wire::ScheduledJobRecord;

use crewboard_domain::{Job, ScheduledDate, ScheduledJob};

/// The storage seam for scheduled-job records.
///
/// Callers are generic over the backend; handlers never talk to a
/// concrete store directly.
#[allow(async_fn_in_trait)]
pub trait ScheduleStore: Send + Sync {
    /// Lists scheduled-job aggregates, optionally filtered to one job.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or a record
    /// fails to decode.
    async fn list_scheduled_jobs(
        &self,
        job_id: Option<i64>,
    ) -> Result<Vec<ScheduledJob>, StoreError>;

    /// Creates (or wholesale-replaces) the schedule for a job.
    ///
    /// # Errors
    ///
    /// Returns an error if the job is unknown, the dates violate a
    /// domain rule, or the store cannot be reached.
    async fn create_scheduled_job(
        &self,
        job_id: i64,
        dates: Vec<ScheduledDate>,
    ) -> Result<ScheduledJob, StoreError>;

    /// Replaces the dates of an existing scheduled-job record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist, the dates violate
    /// a domain rule, or the store cannot be reached.
    async fn update_scheduled_job(
        &self,
        scheduled_job_id: i64,
        dates: Vec<ScheduledDate>,
    ) -> Result<ScheduledJob, StoreError>;

    /// Deletes a scheduled-job record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the store
    /// cannot be reached.
    async fn delete_scheduled_job(&self, scheduled_job_id: i64) -> Result<(), StoreError>;

    /// Lists the jobs eligible for scheduling.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    async fn list_active_jobs(&self) -> Result<Vec<Job>, StoreError>;
}
