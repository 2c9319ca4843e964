use crate::errors::{CalendarError, SetupError};
use crate::models::{ActivityRecord, ContributionGrid, DayCell, WeekColumn};
use chrono::{DateTime, Datelike, Duration, NaiveDate};
use std::collections::{BTreeMap, btree_map::Entry};
use std::str::FromStr;

/// Days before `today` that the grid always covers.
pub const WINDOW_DAYS: i64 = 364;

/// Hard cap on generated days: 53 week columns.
pub const MAX_GRID_DAYS: usize = 371;

pub const MAX_INTENSITY: u8 = 4;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How records that land on the same calendar day are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    FirstWins,
    LastWins,
}

impl FromStr for DuplicatePolicy {
    type Err = SetupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "first" | "first-wins" => Ok(Self::FirstWins),
            "last" | "last-wins" => Ok(Self::LastWins),
            _ => Err(SetupError::UnknownPolicy(value.to_string())),
        }
    }
}

/// Parses a calendar day from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep the calendar day of their own offset; the time of day is dropped.
pub fn parse_date(input: &str) -> Result<NaiveDate, CalendarError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| CalendarError::InvalidDate(input.to_string()))
}

/// `today - 364 days`: the first day of the trailing year.
pub fn trailing_year_start(today: NaiveDate) -> Result<NaiveDate, CalendarError> {
    today
        .checked_sub_signed(Duration::days(WINDOW_DAYS))
        .ok_or_else(|| CalendarError::InvalidDate(today.to_string()))
}

/// The Sunday on or before `today - 364 days`.
pub fn window_start(today: NaiveDate) -> Result<NaiveDate, CalendarError> {
    let earliest = trailing_year_start(today)?;
    let back = i64::from(earliest.weekday().num_days_from_sunday());
    earliest
        .checked_sub_signed(Duration::days(back))
        .ok_or_else(|| CalendarError::InvalidDate(today.to_string()))
}

pub fn intensity_level(count: u32) -> u8 {
    count.min(u32::from(MAX_INTENSITY)) as u8
}

/// Indexes records by day, applying `policy` to days that appear more than once.
///
/// Every record is checked, including ones outside any grid window.
pub fn index_records(
    records: &[ActivityRecord],
    policy: DuplicatePolicy,
) -> Result<BTreeMap<NaiveDate, &ActivityRecord>, CalendarError> {
    let mut index = BTreeMap::new();
    for record in records {
        match index.entry(record.date) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => match policy {
                DuplicatePolicy::Reject => {
                    return Err(CalendarError::DuplicateRecord(record.date));
                }
                DuplicatePolicy::FirstWins => {}
                DuplicatePolicy::LastWins => {
                    slot.insert(record);
                }
            },
        }
    }
    Ok(index)
}

pub fn build_grid(
    records: &[ActivityRecord],
    today: NaiveDate,
) -> Result<ContributionGrid, CalendarError> {
    build_grid_with_policy(records, today, DuplicatePolicy::default())
}

pub fn build_grid_with_policy(
    records: &[ActivityRecord],
    today: NaiveDate,
    policy: DuplicatePolicy,
) -> Result<ContributionGrid, CalendarError> {
    let index = index_records(records, policy)?;
    let start = window_start(today)?;

    let mut weeks = Vec::with_capacity(MAX_GRID_DAYS / 7);
    let mut current = Vec::with_capacity(7);
    for date in start
        .iter_days()
        .take(MAX_GRID_DAYS)
        .take_while(|date| *date <= today)
    {
        current.push(DayCell::new(date, index.get(&date).copied()));
        if current.len() == 7 {
            weeks.push(close_week(std::mem::take(&mut current)));
        }
    }

    if !current.is_empty() {
        weeks.push(close_week(current));
    }

    Ok(ContributionGrid {
        start,
        end: today,
        weeks,
    })
}

fn close_week(days: Vec<DayCell>) -> WeekColumn {
    let month_label = days
        .first()
        .filter(|cell| cell.date.day() <= 7)
        .map(|cell| MONTHS[cell.date.month0() as usize]);
    WeekColumn { month_label, days }
}
