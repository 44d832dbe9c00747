// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::BoardState;
use crate::tests::helpers::{create_test_scheduled_job, day, plain_date};
use crewboard_domain::ScheduledJob;
use time::Month;

#[test]
fn test_upsert_adds_a_new_aggregate() {
    let mut state: BoardState = BoardState::new();
    let aggregate: ScheduledJob =
        create_test_scheduled_job(101, 7, vec![plain_date(day(2024, Month::June, 3))]);

    state.upsert(aggregate.clone());

    assert_eq!(state.len(), 1);
    assert_eq!(state.find_by_job(7), Some(&aggregate));
}

#[test]
fn test_upsert_replaces_wholesale_not_merging() {
    let mut state: BoardState = BoardState::new();
    state.upsert(create_test_scheduled_job(
        101,
        7,
        vec![
            plain_date(day(2024, Month::June, 3)),
            plain_date(day(2024, Month::June, 4)),
        ],
    ));

    // A fresh server record with one date replaces both old dates.
    let replacement: ScheduledJob =
        create_test_scheduled_job(101, 7, vec![plain_date(day(2024, Month::June, 10))]);
    state.upsert(replacement.clone());

    assert_eq!(state.len(), 1);
    let stored: &ScheduledJob = state.find_by_job(7).unwrap();
    assert_eq!(stored, &replacement);
    assert_eq!(stored.dates().len(), 1);
    assert_eq!(stored.dates()[0].date(), day(2024, Month::June, 10));
}

#[test]
fn test_upsert_keeps_other_jobs_untouched() {
    let mut state: BoardState = BoardState::new();
    let other: ScheduledJob =
        create_test_scheduled_job(102, 8, vec![plain_date(day(2024, Month::June, 5))]);
    state.upsert(create_test_scheduled_job(
        101,
        7,
        vec![plain_date(day(2024, Month::June, 3))],
    ));
    state.upsert(other.clone());

    state.upsert(create_test_scheduled_job(
        101,
        7,
        vec![plain_date(day(2024, Month::June, 6))],
    ));

    assert_eq!(state.len(), 2);
    assert_eq!(state.find_by_job(8), Some(&other));
}

#[test]
fn test_remove_by_aggregate_id() {
    let mut state: BoardState = BoardState::new();
    state.upsert(create_test_scheduled_job(
        101,
        7,
        vec![plain_date(day(2024, Month::June, 3))],
    ));

    assert!(state.remove(101));
    assert!(state.is_empty());
}

#[test]
fn test_remove_missing_id_is_a_no_op() {
    let mut state: BoardState = BoardState::new();
    state.upsert(create_test_scheduled_job(
        101,
        7,
        vec![plain_date(day(2024, Month::June, 3))],
    ));

    assert!(!state.remove(999));
    assert_eq!(state.len(), 1);
}

#[test]
fn test_find_by_aggregate_id() {
    let mut state: BoardState = BoardState::new();
    let aggregate: ScheduledJob =
        create_test_scheduled_job(101, 7, vec![plain_date(day(2024, Month::June, 3))]);
    state.upsert(aggregate.clone());

    assert_eq!(state.find(101), Some(&aggregate));
    assert_eq!(state.find(102), None);
}
