// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::confirm::ConfirmationGate;
use crate::request_response::{DateRangeRequest, ScheduleJobRequest};
use crewboard_domain::{Job, RawCount, RawDateInput, RawOperatorAssignment, RawOperatorInput};
use crewboard_store::InMemoryStore;
use time::{Date, Month};

pub fn day(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

pub fn seeded_store() -> InMemoryStore {
    InMemoryStore::with_jobs(vec![
        Job::new(7, String::from("Main St Resurfacing"), Some(String::from("J-1042")), true),
        Job::new(8, String::from("Bridge Deck Repair"), None, true),
        Job::new(9, String::from("Old Yard Cleanup"), None, false),
    ])
}

pub fn dozer_ten_day_template() -> RawDateInput {
    RawDateInput {
        date: None,
        crew_size: Some(RawCount::Number(4)),
        operator: RawOperatorInput::Many(vec![RawOperatorAssignment {
            operator_type: Some(String::from("DOZER")),
            count: Some(RawCount::Number(1)),
        }]),
        other_identifier: vec![String::from("TEN_DAY")],
    }
}

pub fn weekday_range_request(job_id: i64) -> ScheduleJobRequest {
    ScheduleJobRequest {
        job_id,
        template: dozer_ten_day_template(),
        explicit_dates: None,
        range: Some(DateRangeRequest {
            start_date: String::from("2024-06-03"),
            end_date: String::from("2024-06-09"),
            include_saturday: false,
            include_sunday: false,
        }),
    }
}

pub fn explicit_entry(date: &str) -> RawDateInput {
    RawDateInput {
        date: Some(String::from(date)),
        ..RawDateInput::default()
    }
}

/// A gate that declines every operation.
pub struct AutoDecline;

impl ConfirmationGate for AutoDecline {
    fn confirm(&self, _description: &str) -> bool {
        false
    }
}
