// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::day;
use crate::{DomainError, expand_range};
use time::{Date, Month, Weekday};

#[test]
fn test_full_week_without_weekends_yields_five_weekdays() {
    // 2024-06-03 is a Monday, 2024-06-09 the following Sunday.
    let start: Date = day(2024, Month::June, 3);
    let end: Date = day(2024, Month::June, 9);

    let dates: Vec<Date> = expand_range(start, end, false, false).unwrap();

    assert_eq!(dates.len(), 5);
    assert_eq!(dates[0], day(2024, Month::June, 3));
    assert_eq!(dates[4], day(2024, Month::June, 7));
    assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_saturday_included_sunday_excluded() {
    let start: Date = day(2024, Month::June, 3);
    let end: Date = day(2024, Month::June, 9);

    let dates: Vec<Date> = expand_range(start, end, true, false).unwrap();

    assert_eq!(dates.len(), 6);
    assert!(dates.contains(&day(2024, Month::June, 8)));
    assert!(!dates.contains(&day(2024, Month::June, 9)));
}

#[test]
fn test_both_weekend_flags_keep_every_day() {
    let start: Date = day(2024, Month::June, 3);
    let end: Date = day(2024, Month::June, 9);

    let dates: Vec<Date> = expand_range(start, end, true, true).unwrap();

    assert_eq!(dates.len(), 7);
}

#[test]
fn test_excluded_weekend_only_range_is_empty() {
    // Saturday and Sunday only, both flags off.
    let start: Date = day(2024, Month::June, 8);
    let end: Date = day(2024, Month::June, 9);

    let dates: Vec<Date> = expand_range(start, end, false, false).unwrap();

    assert!(dates.is_empty());
}

#[test]
fn test_single_day_range() {
    let monday: Date = day(2024, Month::June, 3);

    let dates: Vec<Date> = expand_range(monday, monday, false, false).unwrap();

    assert_eq!(dates, vec![monday]);
}

#[test]
fn test_end_before_start_is_rejected() {
    let start: Date = day(2024, Month::June, 9);
    let end: Date = day(2024, Month::June, 3);

    let result: Result<Vec<Date>, DomainError> = expand_range(start, end, false, false);

    assert_eq!(result, Err(DomainError::InvalidDateRange { start, end }));
}

#[test]
fn test_expansion_is_deterministic() {
    let start: Date = day(2024, Month::May, 27);
    let end: Date = day(2024, Month::June, 14);

    let first: Vec<Date> = expand_range(start, end, true, false).unwrap();
    let second: Vec<Date> = expand_range(start, end, true, false).unwrap();

    assert_eq!(first, second);
    assert!(first.iter().all(|d| d.weekday() != Weekday::Sunday));
}
