// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crewboard_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested scheduled job does not exist.
    #[error("Scheduled job not found: {scheduled_job_id}")]
    NotFound { scheduled_job_id: i64 },

    /// The store rejected the operation.
    #[error("Store rejected the operation: {0}")]
    Rejected(String),

    /// The store could not be reached.
    #[error("Store unreachable: {0}")]
    Unreachable(String),

    /// A stored record could not be encoded or decoded.
    #[error("Record codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// A stored record violated a domain rule on the way back in.
    #[error("Stored record is invalid: {0}")]
    Invalid(#[from] DomainError),
}
