// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire representation of stored schedule records.
//!
//! Records travel as JSON in the loose shape the original service API
//! produced. Outbound, the canonical domain types serialize directly.
//! Inbound, every per-date entry comes back through the normalizer, so
//! legacy shapes (single-object operator fields, text counts) are
//! upgraded on read instead of being rejected.

use crewboard_domain::{DomainError, Job, RawDateInput, ScheduledDate, ScheduledJob, normalize};
use serde::Deserialize;

/// A scheduled-job record as read back from the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledJobRecord {
    /// The record identifier assigned by the store.
    pub id: i64,
    /// The job this schedule belongs to.
    pub job: Job,
    /// Raw per-date entries, upgraded via the normalizer.
    #[serde(default)]
    pub dates: Vec<RawDateInput>,
}

impl ScheduledJobRecord {
    /// Upgrades this wire record into the canonical aggregate.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry fails normalization or two
    /// entries share a calendar day.
    pub fn into_scheduled_job(self) -> Result<ScheduledJob, DomainError> {
        let dates: Vec<ScheduledDate> = self
            .dates
            .iter()
            .map(normalize)
            .collect::<Result<Vec<ScheduledDate>, DomainError>>()?;
        ScheduledJob::new(self.id, self.job, dates)
    }
}
