// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use crewboard::BoardState;
use crewboard_api::{
    ApiResult, DateRangeRequest, LoadBoardResponse, ScheduleJobRequest, ScheduleJobResponse,
    load_board, schedule_job,
};
use crewboard_domain::{
    CalendarWindow, ColorCategory, DEFAULT_SPAN, DayIndex, Job, OtherIdentifier, RawCount,
    RawDateInput, RawOperatorAssignment, RawOperatorInput, ScheduledDate, color_category,
    identifier_abbreviation, is_today, is_weekend, parse_day,
};
use crewboard_store::InMemoryStore;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};
use tracing::info;

const DAY_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Crewboard - terminal viewer for the job scheduling board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First day of the board window (`YYYY-MM-DD`). Defaults to today.
    #[arg(short, long)]
    start_date: Option<String>,

    /// Number of days in the board window
    #[arg(long, default_value_t = DEFAULT_SPAN)]
    span: u16,

    /// Keep Saturdays when scheduling the demo jobs
    #[arg(long)]
    include_saturday: bool,

    /// Keep Sundays when scheduling the demo jobs
    #[arg(long)]
    include_sunday: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Crewboard");

    let today: Date = OffsetDateTime::now_utc().date();
    let start_date: Date = match &args.start_date {
        Some(value) => parse_day(value)?,
        None => today,
    };
    let window: CalendarWindow = CalendarWindow::new(start_date, args.span)?;

    let store: InMemoryStore = demo_store();
    seed_demo_schedules(&store, window, &args).await?;

    let board: ApiResult<LoadBoardResponse> = load_board(&store).await?;
    render_board(&board.new_state, window, today)?;

    Ok(())
}

fn demo_store() -> InMemoryStore {
    InMemoryStore::with_jobs(vec![
        Job::new(
            1,
            String::from("Main St Resurfacing"),
            Some(String::from("J-1042")),
            true,
        ),
        Job::new(2, String::from("Bridge Deck Repair"), None, true),
        Job::new(3, String::from("Culvert Replacement"), None, true),
    ])
}

/// Schedules a few jobs against the store so the rendered board has
/// something to show.
async fn seed_demo_schedules(
    store: &InMemoryStore,
    window: CalendarWindow,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    let state: BoardState = BoardState::new();
    let start: Date = window.start_date();

    // First job: a two-week range with a dozer and ten-day notice.
    let range_end: Date = start
        .checked_add(Duration::days(11))
        .unwrap_or(start);
    let range_request: ScheduleJobRequest = ScheduleJobRequest {
        job_id: 1,
        template: RawDateInput {
            date: None,
            crew_size: Some(RawCount::Number(4)),
            operator: RawOperatorInput::Many(vec![RawOperatorAssignment {
                operator_type: Some(String::from("DOZER")),
                count: Some(RawCount::Number(1)),
            }]),
            other_identifier: vec![String::from("TEN_DAY")],
        },
        explicit_dates: None,
        range: Some(DateRangeRequest {
            start_date: start.format(&DAY_FORMAT)?,
            end_date: range_end.format(&DAY_FORMAT)?,
            include_saturday: args.include_saturday,
            include_sunday: args.include_sunday,
        }),
    };
    let result: ApiResult<ScheduleJobResponse> =
        schedule_job(&state, store, range_request).await?;

    // Second job: a handful of explicit days with mixed attributes.
    let mut explicit: Vec<RawDateInput> = Vec::new();
    for (offset, tag) in [(2_i64, "TIME_AND_MATERIALS"), (4, "GRINDING"), (7, "NONE")] {
        let date: Date = start.checked_add(Duration::days(offset)).unwrap_or(start);
        explicit.push(RawDateInput {
            date: Some(date.format(&DAY_FORMAT)?),
            crew_size: Some(RawCount::Number(2)),
            operator: RawOperatorInput::Absent,
            other_identifier: vec![String::from(tag)],
        });
    }
    let explicit_request: ScheduleJobRequest = ScheduleJobRequest {
        job_id: 2,
        template: RawDateInput::default(),
        explicit_dates: Some(explicit),
        range: None,
    };
    schedule_job(&result.new_state, store, explicit_request).await?;

    Ok(())
}

/// Renders the board grid as text: one header row of dates, one row
/// per scheduled job, one cell per visible day.
fn render_board(
    state: &BoardState,
    window: CalendarWindow,
    today: Date,
) -> Result<(), Box<dyn std::error::Error>> {
    let dates: Vec<Date> = window.visible_dates()?;

    let mut header: String = format!("{:<24}", "Job");
    let mut weekday_row: String = format!("{:<24}", "");
    for date in &dates {
        let marker: &str = if is_today(*date, today) { "*" } else { "" };
        header.push_str(&format!("{:>4}", format!("{}{marker}", date.day())));
        let initial: &str = if is_weekend(*date) {
            "·"
        } else {
            weekday_initial(*date)
        };
        weekday_row.push_str(&format!("{initial:>4}"));
    }
    println!("{header}");
    println!("{weekday_row}");

    for aggregate in &state.scheduled_jobs {
        let index: DayIndex<'_> = DayIndex::build(aggregate);
        let mut row: String = format!("{:<24}", truncate(&aggregate.job().name, 23));
        for date in &dates {
            row.push_str(&format!("{:>4}", cell_text(index.details_for(*date))));
        }
        println!("{row}");
    }

    println!();
    println!("Legend: TM time & materials, 10D ten-day notice, G grinding, OP operator, X scheduled");
    Ok(())
}

fn cell_text(entry: Option<&ScheduledDate>) -> String {
    let Some(scheduled) = entry else {
        return String::new();
    };

    let tags: Vec<String> = scheduled
        .identifiers()
        .tags()
        .iter()
        .filter(|tag| **tag != OtherIdentifier::None)
        .map(|tag| identifier_abbreviation(tag.as_str()))
        .collect();
    if tags.is_empty() {
        return match color_category(scheduled) {
            ColorCategory::OperatorAssigned => String::from("OP"),
            _ => String::from("X"),
        };
    }
    tags.join("+")
}

fn weekday_initial(date: Date) -> &'static str {
    match date.weekday() {
        time::Weekday::Monday => "M",
        time::Weekday::Tuesday | time::Weekday::Thursday => "T",
        time::Weekday::Wednesday => "W",
        time::Weekday::Friday => "F",
        time::Weekday::Saturday | time::Weekday::Sunday => "S",
    }
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
