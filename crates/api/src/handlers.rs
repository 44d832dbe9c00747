// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for board mutations and read-only queries.
//!
//! Mutation handlers take the current board state by reference and
//! return the new state alongside the response. The store write happens
//! first; local state is only reconciled from what the store returned.
//! A failed operation therefore provably leaves the caller's state
//! untouched.

use crewboard::{AssembleRequest, BoardState, RangeConfig, assemble};
use crewboard_domain::{Job, RawDateInput, ScheduledDate, ScheduledJob, parse_day};
use crewboard_store::{ScheduleStore, StoreError};
use tracing::error;

use crate::confirm::ConfirmationGate;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    DateRangeRequest, DeleteScheduledJobRequest, DeleteScheduledJobResponse, ListActiveJobsResponse,
    LoadBoardResponse, ScheduleJobRequest, ScheduleJobResponse, UpdateScheduleRequest,
    UpdateScheduleResponse,
};

/// The result of a board mutation: the response plus the reconciled
/// board state.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The board state after the operation.
    pub new_state: BoardState,
}

/// Loads the full board from the store.
///
/// # Arguments
///
/// * `store` - The schedule store to query
///
/// # Errors
///
/// Returns an error if the store cannot be reached or a record fails
/// to decode.
pub async fn load_board<S: ScheduleStore>(
    store: &S,
) -> Result<ApiResult<LoadBoardResponse>, ApiError> {
    let scheduled_jobs: Vec<ScheduledJob> = store
        .list_scheduled_jobs(None)
        .await
        .map_err(store_failure)?;

    Ok(ApiResult {
        response: LoadBoardResponse {
            scheduled_jobs: scheduled_jobs.clone(),
        },
        new_state: BoardState::from_scheduled_jobs(scheduled_jobs),
    })
}

/// Places a job on the schedule.
///
/// Assembles the full date list from the request, writes it to the
/// store, and reconciles the returned aggregate into the board state.
/// If the job already has a schedule, the store replaces it wholesale.
///
/// # Arguments
///
/// * `state` - The current board state
/// * `store` - The schedule store
/// * `request` - The scheduling request
///
/// # Errors
///
/// Returns an error if the submission is invalid, the job is unknown,
/// or the store cannot be reached. On error the caller's state is
/// unchanged.
pub async fn schedule_job<S: ScheduleStore>(
    state: &BoardState,
    store: &S,
    request: ScheduleJobRequest,
) -> Result<ApiResult<ScheduleJobResponse>, ApiError> {
    let dates: Vec<ScheduledDate> = assemble_submission(
        request.job_id,
        request.template,
        request.explicit_dates,
        request.range.as_ref(),
    )?;

    let stored: ScheduledJob = store
        .create_scheduled_job(request.job_id, dates)
        .await
        .map_err(store_failure)?;

    let mut new_state: BoardState = state.clone();
    new_state.upsert(stored.clone());

    Ok(ApiResult {
        response: ScheduleJobResponse {
            message: format!("Scheduled job '{}'", stored.job().name),
            scheduled_job: stored,
        },
        new_state,
    })
}

/// Replaces the dates of an existing scheduled job.
///
/// # Arguments
///
/// * `state` - The current board state
/// * `store` - The schedule store
/// * `request` - The update request
///
/// # Errors
///
/// Returns an error if the record is not on the board, the submission
/// is invalid, or the store cannot be reached. On error the caller's
/// state is unchanged.
pub async fn update_schedule<S: ScheduleStore>(
    state: &BoardState,
    store: &S,
    request: UpdateScheduleRequest,
) -> Result<ApiResult<UpdateScheduleResponse>, ApiError> {
    let existing: &ScheduledJob =
        state
            .find(request.scheduled_job_id)
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Scheduled job"),
                message: format!("No scheduled job with id {}", request.scheduled_job_id),
            })?;

    let dates: Vec<ScheduledDate> = assemble_submission(
        existing.job_id(),
        request.template,
        request.explicit_dates,
        request.range.as_ref(),
    )?;

    let stored: ScheduledJob = store
        .update_scheduled_job(request.scheduled_job_id, dates)
        .await
        .map_err(store_failure)?;

    let mut new_state: BoardState = state.clone();
    new_state.upsert(stored.clone());

    Ok(ApiResult {
        response: UpdateScheduleResponse {
            message: format!("Updated schedule for job '{}'", stored.job().name),
            scheduled_job: stored,
        },
        new_state,
    })
}

/// Removes a job from the schedule, subject to confirmation.
///
/// If the gate declines, nothing is written and the returned state is
/// the caller's state unchanged.
///
/// # Arguments
///
/// * `state` - The current board state
/// * `store` - The schedule store
/// * `request` - The delete request
/// * `gate` - The confirmation gate for this destructive operation
///
/// # Errors
///
/// Returns an error if the record does not exist or the store cannot
/// be reached. On error the caller's state is unchanged.
pub async fn delete_scheduled_job<S: ScheduleStore, G: ConfirmationGate>(
    state: &BoardState,
    store: &S,
    request: DeleteScheduledJobRequest,
    gate: &G,
) -> Result<ApiResult<DeleteScheduledJobResponse>, ApiError> {
    let description: String = match state.find(request.scheduled_job_id) {
        Some(existing) => format!(
            "Remove job '{}' and all {} of its scheduled dates",
            existing.job().name,
            existing.dates().len()
        ),
        None => format!(
            "Remove scheduled job {} from the board",
            request.scheduled_job_id
        ),
    };

    if !gate.confirm(&description) {
        return Ok(ApiResult {
            response: DeleteScheduledJobResponse {
                deleted: false,
                message: String::from("Deletion cancelled"),
            },
            new_state: state.clone(),
        });
    }

    store
        .delete_scheduled_job(request.scheduled_job_id)
        .await
        .map_err(store_failure)?;

    let mut new_state: BoardState = state.clone();
    new_state.remove(request.scheduled_job_id);

    Ok(ApiResult {
        response: DeleteScheduledJobResponse {
            deleted: true,
            message: format!("Deleted scheduled job {}", request.scheduled_job_id),
        },
        new_state,
    })
}

/// Lists the jobs eligible for scheduling.
///
/// # Arguments
///
/// * `store` - The schedule store to query
///
/// # Errors
///
/// Returns an error if the store cannot be reached.
pub async fn list_active_jobs<S: ScheduleStore>(
    store: &S,
) -> Result<ListActiveJobsResponse, ApiError> {
    let jobs: Vec<Job> = store.list_active_jobs().await.map_err(store_failure)?;
    Ok(ListActiveJobsResponse { jobs })
}

fn assemble_submission(
    job_id: i64,
    template: RawDateInput,
    explicit_dates: Option<Vec<RawDateInput>>,
    range: Option<&DateRangeRequest>,
) -> Result<Vec<ScheduledDate>, ApiError> {
    let range: Option<RangeConfig> = range.map(parse_range).transpose()?;
    let request: AssembleRequest = AssembleRequest {
        job_id,
        template,
        explicit_dates,
        range,
    };
    assemble(&request).map_err(translate_core_error)
}

fn parse_range(range: &DateRangeRequest) -> Result<RangeConfig, ApiError> {
    Ok(RangeConfig {
        start: parse_day(&range.start_date).map_err(translate_domain_error)?,
        end: parse_day(&range.end_date).map_err(translate_domain_error)?,
        include_saturday: range.include_saturday,
        include_sunday: range.include_sunday,
    })
}

fn store_failure(err: StoreError) -> ApiError {
    if let StoreError::Unreachable(message) = &err {
        error!(%message, "schedule store unreachable");
    }
    err.into()
}
