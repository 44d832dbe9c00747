// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    IdentifierSet, Job, OperatorAssignment, OperatorType, OtherIdentifier, ScheduledDate,
    ScheduledJob,
};
use time::{Date, Month};

pub fn day(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

pub fn create_test_job() -> Job {
    Job::new(7, String::from("Main St Resurfacing"), Some(String::from("J-1042")), true)
}

pub fn plain_date(date: Date) -> ScheduledDate {
    ScheduledDate::new(date, None, Vec::new(), IdentifierSet::new())
}

pub fn dozer_date(date: Date, crew_size: u32) -> ScheduledDate {
    let operator: OperatorAssignment =
        OperatorAssignment::new(OperatorType::Dozer, Some(1)).unwrap();
    ScheduledDate::new(
        date,
        Some(crew_size),
        vec![operator],
        IdentifierSet::from_tags([OtherIdentifier::TenDay]),
    )
}

pub fn create_test_scheduled_job(dates: Vec<ScheduledDate>) -> ScheduledJob {
    ScheduledJob::new(101, create_test_job(), dates).unwrap()
}
