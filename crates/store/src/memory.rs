// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory store backend.
//!
//! Records are held as serialized JSON and decoded through the wire
//! upgrade path on every read, so the backend exercises the same codec
//! behavior a remote service would. Used for development, the demo
//! binary, and tests.

use crate::error::StoreError;
use crate::wire::ScheduledJobRecord;
use crate::ScheduleStore;
use crewboard_domain::{Job, ScheduledDate, ScheduledJob};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

struct Inner {
    jobs: Vec<Job>,
    /// Serialized scheduled-job records keyed by record id.
    records: HashMap<i64, String>,
    next_id: i64,
    /// One-shot failure message; the next operation fails with it.
    fail_next: Option<String>,
}

/// An in-memory `ScheduleStore` backend.
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    /// Creates an empty store with no known jobs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                jobs: Vec::new(),
                records: HashMap::new(),
                next_id: 1,
                fail_next: None,
            }),
        }
    }

    /// Creates a store seeded with the given jobs.
    #[must_use]
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        let store: Self = Self::new();
        if let Ok(mut inner) = store.inner.lock() {
            inner.jobs = jobs;
        }
        store
    }

    /// Replaces the set of known jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    pub fn seed_jobs(&self, jobs: Vec<Job>) -> Result<(), StoreError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;
        inner.jobs = jobs;
        Ok(())
    }

    /// Arranges for the next store operation to fail as unreachable.
    ///
    /// One-shot: the operation after the failing one proceeds normally.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    pub fn fail_next(&self, message: &str) -> Result<(), StoreError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;
        inner.fail_next = Some(message.to_string());
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unreachable("Store lock poisoned".to_string()))
    }

    fn take_injected_failure(inner: &mut Inner) -> Result<(), StoreError> {
        match inner.fail_next.take() {
            Some(message) => Err(StoreError::Unreachable(message)),
            None => Ok(()),
        }
    }

    fn decode(json: &str) -> Result<ScheduledJob, StoreError> {
        let record: ScheduledJobRecord = serde_json::from_str(json)?;
        Ok(record.into_scheduled_job()?)
    }

    fn encode(aggregate: &ScheduledJob) -> Result<String, StoreError> {
        Ok(serde_json::to_string(aggregate)?)
    }

    fn find_record_id_for_job(inner: &Inner, job_id: i64) -> Result<Option<i64>, StoreError> {
        for json in inner.records.values() {
            let aggregate: ScheduledJob = Self::decode(json)?;
            if aggregate.job_id() == job_id {
                return Ok(Some(aggregate.id()));
            }
        }
        Ok(None)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleStore for InMemoryStore {
    async fn list_scheduled_jobs(
        &self,
        job_id: Option<i64>,
    ) -> Result<Vec<ScheduledJob>, StoreError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;
        Self::take_injected_failure(&mut inner)?;

        let mut aggregates: Vec<ScheduledJob> = Vec::with_capacity(inner.records.len());
        for json in inner.records.values() {
            let aggregate: ScheduledJob = Self::decode(json)?;
            if job_id.is_none_or(|id| aggregate.job_id() == id) {
                aggregates.push(aggregate);
            }
        }
        aggregates.sort_by_key(ScheduledJob::id);
        Ok(aggregates)
    }

    async fn create_scheduled_job(
        &self,
        job_id: i64,
        dates: Vec<ScheduledDate>,
    ) -> Result<ScheduledJob, StoreError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;
        Self::take_injected_failure(&mut inner)?;

        let job: Job = inner
            .jobs
            .iter()
            .find(|job| job.id == job_id)
            .cloned()
            .ok_or_else(|| StoreError::Rejected(format!("Unknown job: {job_id}")))?;

        // Scheduling a job that already has a record replaces that
        // record wholesale under its existing id.
        let record_id: i64 = match Self::find_record_id_for_job(&inner, job_id)? {
            Some(existing) => existing,
            None => {
                let id: i64 = inner.next_id;
                inner.next_id += 1;
                id
            }
        };

        let aggregate: ScheduledJob =
            ScheduledJob::new(record_id, job, dates).map_err(StoreError::Invalid)?;
        let json: String = Self::encode(&aggregate)?;
        inner.records.insert(record_id, json.clone());
        debug!(record_id, job_id, "stored scheduled job");

        Self::decode(&json)
    }

    async fn update_scheduled_job(
        &self,
        scheduled_job_id: i64,
        dates: Vec<ScheduledDate>,
    ) -> Result<ScheduledJob, StoreError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;
        Self::take_injected_failure(&mut inner)?;

        let existing: ScheduledJob = match inner.records.get(&scheduled_job_id) {
            Some(json) => Self::decode(json)?,
            None => {
                return Err(StoreError::NotFound { scheduled_job_id });
            }
        };

        let aggregate: ScheduledJob =
            ScheduledJob::new(scheduled_job_id, existing.job().clone(), dates)
                .map_err(StoreError::Invalid)?;
        let json: String = Self::encode(&aggregate)?;
        inner.records.insert(scheduled_job_id, json.clone());
        debug!(scheduled_job_id, "updated scheduled job");

        Self::decode(&json)
    }

    async fn delete_scheduled_job(&self, scheduled_job_id: i64) -> Result<(), StoreError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;
        Self::take_injected_failure(&mut inner)?;

        if inner.records.remove(&scheduled_job_id).is_none() {
            return Err(StoreError::NotFound { scheduled_job_id });
        }
        debug!(scheduled_job_id, "deleted scheduled job");
        Ok(())
    }

    async fn list_active_jobs(&self) -> Result<Vec<Job>, StoreError> {
        let mut inner: MutexGuard<'_, Inner> = self.lock()?;
        Self::take_injected_failure(&mut inner)?;

        Ok(inner
            .jobs
            .iter()
            .filter(|job| job.active)
            .cloned()
            .collect())
    }
}
