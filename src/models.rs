use crate::calendar::{intensity_level, parse_date};
use crate::errors::CalendarError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ActivityRecord {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date,
            count,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// An activity record as it arrives from a seed file, before its date is checked.
#[derive(Debug, Clone, Deserialize)]
pub struct RawActivityRecord {
    pub date: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<RawActivityRecord> for ActivityRecord {
    type Error = CalendarError;

    fn try_from(raw: RawActivityRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            date: parse_date(&raw.date)?,
            count: raw.count,
            notes: raw.notes,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: u32,
    pub notes: Option<String>,
    pub intensity: u8,
}

impl DayCell {
    pub fn new(date: NaiveDate, record: Option<&ActivityRecord>) -> Self {
        let count = record.map_or(0, |record| record.count);
        Self {
            date,
            count,
            notes: record.and_then(|record| record.notes.clone()),
            intensity: intensity_level(count),
        }
    }

    pub fn from_entry(date: NaiveDate, entry: DayEntry) -> Self {
        Self {
            date,
            count: entry.count,
            notes: entry.notes,
            intensity: intensity_level(entry.count),
        }
    }
}

/// One calendar week, Sunday first. The last column of a grid may be short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekColumn {
    pub month_label: Option<&'static str>,
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionGrid {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub weeks: Vec<WeekColumn>,
}

impl ContributionGrid {
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|cell| cell.date == date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayEntry {
    pub count: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityStats {
    pub total_activities: u64,
    pub active_days: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct TodayQuery {
    pub today: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NotesQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordActivityRequest {
    pub date: Option<String>,
    pub count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub date: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    pub date: NaiveDate,
    pub note: String,
}
