// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::confirm::AutoApprove;
use crate::error::ApiError;
use crate::handlers::{
    ApiResult, delete_scheduled_job, list_active_jobs, load_board, schedule_job, update_schedule,
};
use crate::request_response::{
    DateRangeRequest, DeleteScheduledJobRequest, DeleteScheduledJobResponse, LoadBoardResponse,
    ScheduleJobRequest, ScheduleJobResponse, UpdateScheduleRequest,
};
use crate::tests::helpers::{
    AutoDecline, day, explicit_entry, seeded_store, weekday_range_request,
};
use crewboard::BoardState;
use crewboard_domain::{OperatorType, OtherIdentifier, RawDateInput};
use crewboard_store::{InMemoryStore, ScheduleStore};
use time::Month;

#[tokio::test]
async fn test_schedule_job_range_mode_end_to_end() {
    let store: InMemoryStore = seeded_store();
    let state: BoardState = BoardState::new();

    let result: ApiResult<ScheduleJobResponse> =
        schedule_job(&state, &store, weekday_range_request(7))
            .await
            .unwrap();

    // Mon Jun 3 through Fri Jun 7; the weekend is excluded.
    let stored = &result.response.scheduled_job;
    assert_eq!(stored.job_id(), 7);
    assert_eq!(stored.dates().len(), 5);
    assert_eq!(stored.dates()[0].date(), day(2024, Month::June, 3));
    assert_eq!(stored.dates()[4].date(), day(2024, Month::June, 7));
    for scheduled in stored.dates() {
        assert_eq!(scheduled.crew_size(), Some(4));
        assert_eq!(scheduled.operators()[0].operator_type(), OperatorType::Dozer);
        assert_eq!(scheduled.operators()[0].count(), Some(1));
        assert_eq!(scheduled.identifiers().tags(), &[OtherIdentifier::TenDay]);
    }
    assert_eq!(result.new_state.len(), 1);
}

#[tokio::test]
async fn test_rescheduling_replaces_the_board_entry_wholesale() {
    let store: InMemoryStore = seeded_store();
    let state: BoardState = BoardState::new();
    let first: ApiResult<ScheduleJobResponse> =
        schedule_job(&state, &store, weekday_range_request(7))
            .await
            .unwrap();

    let request: ScheduleJobRequest = ScheduleJobRequest {
        job_id: 7,
        template: RawDateInput::default(),
        explicit_dates: Some(vec![explicit_entry("2024-06-10")]),
        range: None,
    };
    let second: ApiResult<ScheduleJobResponse> =
        schedule_job(&first.new_state, &store, request).await.unwrap();

    // One entry for the job; the five range dates are gone.
    assert_eq!(second.new_state.len(), 1);
    let entry = second.new_state.find_by_job(7).unwrap();
    assert_eq!(entry.id(), first.response.scheduled_job.id());
    assert_eq!(entry.dates().len(), 1);
    assert_eq!(entry.dates()[0].date(), day(2024, Month::June, 10));
}

#[tokio::test]
async fn test_mode_conflict_is_rejected_at_the_boundary() {
    let store: InMemoryStore = seeded_store();
    let state: BoardState = BoardState::new();
    let mut request: ScheduleJobRequest = weekday_range_request(7);
    request.explicit_dates = Some(vec![explicit_entry("2024-06-03")]);

    let result = schedule_job(&state, &store, request).await;

    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "dates"));
    // Nothing reached the store.
    assert!(store.list_scheduled_jobs(None).await.is_ok_and(|v| v.is_empty()));
}

#[tokio::test]
async fn test_unparseable_range_date_is_rejected() {
    let store: InMemoryStore = seeded_store();
    let state: BoardState = BoardState::new();
    let mut request: ScheduleJobRequest = weekday_range_request(7);
    request.range = Some(DateRangeRequest {
        start_date: String::from("June 3rd"),
        end_date: String::from("2024-06-09"),
        include_saturday: false,
        include_sunday: false,
    });

    let result = schedule_job(&state, &store, request).await;

    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "date"));
}

#[tokio::test]
async fn test_store_failure_leaves_state_untouched() {
    let store: InMemoryStore = seeded_store();
    let state: BoardState = BoardState::new();
    store.fail_next("connection refused").unwrap();

    let result = schedule_job(&state, &store, weekday_range_request(7)).await;

    assert!(matches!(result, Err(ApiError::RemoteFailure { .. })));
    assert!(state.is_empty());
    // The failure was one-shot; the board is still reachable and empty.
    let board: ApiResult<LoadBoardResponse> = load_board(&store).await.unwrap();
    assert!(board.new_state.is_empty());
}

#[tokio::test]
async fn test_update_schedule_replaces_dates() {
    let store: InMemoryStore = seeded_store();
    let scheduled: ApiResult<ScheduleJobResponse> =
        schedule_job(&BoardState::new(), &store, weekday_range_request(7))
            .await
            .unwrap();

    let request: UpdateScheduleRequest = UpdateScheduleRequest {
        scheduled_job_id: scheduled.response.scheduled_job.id(),
        template: RawDateInput::default(),
        explicit_dates: Some(vec![explicit_entry("2024-06-12"), explicit_entry("2024-06-13")]),
        range: None,
    };
    let updated = update_schedule(&scheduled.new_state, &store, request)
        .await
        .unwrap();

    let entry = updated.new_state.find_by_job(7).unwrap();
    assert_eq!(entry.dates().len(), 2);
    assert_eq!(entry.dates()[0].date(), day(2024, Month::June, 12));
}

#[tokio::test]
async fn test_update_unknown_record_is_not_found() {
    let store: InMemoryStore = seeded_store();
    let request: UpdateScheduleRequest = UpdateScheduleRequest {
        scheduled_job_id: 42,
        template: RawDateInput::default(),
        explicit_dates: Some(vec![explicit_entry("2024-06-12")]),
        range: None,
    };

    let result = update_schedule(&BoardState::new(), &store, request).await;

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[tokio::test]
async fn test_declined_deletion_changes_nothing() {
    let store: InMemoryStore = seeded_store();
    let scheduled: ApiResult<ScheduleJobResponse> =
        schedule_job(&BoardState::new(), &store, weekday_range_request(7))
            .await
            .unwrap();
    let record_id: i64 = scheduled.response.scheduled_job.id();

    let result: ApiResult<DeleteScheduledJobResponse> = delete_scheduled_job(
        &scheduled.new_state,
        &store,
        DeleteScheduledJobRequest {
            scheduled_job_id: record_id,
        },
        &AutoDecline,
    )
    .await
    .unwrap();

    assert!(!result.response.deleted);
    assert_eq!(result.new_state, scheduled.new_state);
    assert_eq!(store.list_scheduled_jobs(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_confirmed_deletion_removes_record_and_entry() {
    let store: InMemoryStore = seeded_store();
    let scheduled: ApiResult<ScheduleJobResponse> =
        schedule_job(&BoardState::new(), &store, weekday_range_request(7))
            .await
            .unwrap();
    let record_id: i64 = scheduled.response.scheduled_job.id();

    let result: ApiResult<DeleteScheduledJobResponse> = delete_scheduled_job(
        &scheduled.new_state,
        &store,
        DeleteScheduledJobRequest {
            scheduled_job_id: record_id,
        },
        &AutoApprove,
    )
    .await
    .unwrap();

    assert!(result.response.deleted);
    assert!(result.new_state.is_empty());
    assert!(store.list_scheduled_jobs(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_board_mirrors_the_store() {
    let store: InMemoryStore = seeded_store();
    schedule_job(&BoardState::new(), &store, weekday_range_request(7))
        .await
        .unwrap();
    schedule_job(&BoardState::new(), &store, weekday_range_request(8))
        .await
        .unwrap();

    let board: ApiResult<LoadBoardResponse> = load_board(&store).await.unwrap();

    assert_eq!(board.response.scheduled_jobs.len(), 2);
    assert_eq!(board.new_state.len(), 2);
    assert!(board.new_state.find_by_job(7).is_some());
    assert!(board.new_state.find_by_job(8).is_some());
}

#[tokio::test]
async fn test_list_active_jobs_excludes_inactive() {
    let store: InMemoryStore = seeded_store();

    let response = list_active_jobs(&store).await.unwrap();

    let ids: Vec<i64> = response.jobs.iter().map(|job| job.id).collect();
    assert_eq!(ids, vec![7, 8]);
}
