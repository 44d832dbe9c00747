// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crewboard_domain::{IdentifierSet, Job, ScheduledDate, ScheduledJob};
use time::{Date, Month};

pub fn day(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

pub fn plain_date(date: Date) -> ScheduledDate {
    ScheduledDate::new(date, None, Vec::new(), IdentifierSet::new())
}

pub fn create_test_job(id: i64, name: &str) -> Job {
    Job::new(id, String::from(name), None, true)
}

pub fn create_test_scheduled_job(id: i64, job_id: i64, dates: Vec<ScheduledDate>) -> ScheduledJob {
    ScheduledJob::new(id, create_test_job(job_id, "Main St Resurfacing"), dates).unwrap()
}
