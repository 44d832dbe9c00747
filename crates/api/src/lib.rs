// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Crewboard scheduling board.
//!
//! Handlers translate boundary DTOs into core submissions, run them
//! against the schedule store, and hand back the response together
//! with the reconciled board state. Errors never leak domain or store
//! types across the boundary; they are translated into `ApiError`.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod confirm;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use confirm::{AutoApprove, ConfirmationGate};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, delete_scheduled_job, list_active_jobs, load_board, schedule_job, update_schedule,
};
pub use request_response::{
    DateRangeRequest, DeleteScheduledJobRequest, DeleteScheduledJobResponse, ListActiveJobsResponse,
    LoadBoardResponse, ScheduleJobRequest, ScheduleJobResponse, UpdateScheduleRequest,
    UpdateScheduleResponse,
};
