// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::InMemoryStore;
use crewboard_domain::{
    IdentifierSet, Job, OperatorAssignment, OperatorType, OtherIdentifier, ScheduledDate,
};
use time::{Date, Month};

pub fn day(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

pub fn plain_date(date: Date) -> ScheduledDate {
    ScheduledDate::new(date, None, Vec::new(), IdentifierSet::new())
}

pub fn rich_date(date: Date) -> ScheduledDate {
    let operator: OperatorAssignment =
        OperatorAssignment::new(OperatorType::Dozer, Some(2)).unwrap();
    ScheduledDate::new(
        date,
        Some(4),
        vec![operator],
        IdentifierSet::from_tags([OtherIdentifier::TimeAndMaterials]),
    )
}

pub fn seeded_store() -> InMemoryStore {
    InMemoryStore::with_jobs(vec![
        Job::new(7, String::from("Main St Resurfacing"), Some(String::from("J-1042")), true),
        Job::new(8, String::from("Bridge Deck Repair"), None, true),
        Job::new(9, String::from("Old Yard Cleanup"), None, false),
    ])
}
