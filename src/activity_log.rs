use crate::calendar::{DuplicatePolicy, index_records};
use crate::errors::CalendarError;
use crate::models::{ActivityRecord, DayEntry, NoteEntry};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const DEFAULT_NOTE_LIMIT: usize = 5;

/// In-memory activity per calendar day. Keyed by date, so a day never has two entries.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    days: BTreeMap<NaiveDate, DayEntry>,
}

impl ActivityLog {
    pub fn from_records(
        records: &[ActivityRecord],
        policy: DuplicatePolicy,
    ) -> Result<Self, CalendarError> {
        let days = index_records(records, policy)?
            .into_iter()
            .map(|(date, record)| {
                let entry = DayEntry {
                    count: record.count,
                    notes: record.notes.clone(),
                };
                (date, entry)
            })
            .collect();
        Ok(Self { days })
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn entry(&self, date: NaiveDate) -> DayEntry {
        self.days.get(&date).cloned().unwrap_or_default()
    }

    /// Adds `amount` to the day's count and returns the new count.
    pub fn record(&mut self, date: NaiveDate, amount: u32) -> u32 {
        let entry = self.days.entry(date).or_default();
        entry.count = entry.count.saturating_add(amount);
        entry.count
    }

    /// Creates or replaces the note for a day. Returns the previous note, if any.
    pub fn set_note(&mut self, date: NaiveDate, note: impl Into<String>) -> Option<String> {
        self.days.entry(date).or_default().notes.replace(note.into())
    }

    /// Notes from the newest day backwards.
    pub fn recent_notes(&self, limit: usize) -> Vec<NoteEntry> {
        self.days
            .iter()
            .rev()
            .filter_map(|(date, entry)| {
                entry.notes.as_ref().map(|note| NoteEntry {
                    date: *date,
                    note: note.clone(),
                })
            })
            .take(limit)
            .collect()
    }

    pub fn records(&self) -> Vec<ActivityRecord> {
        self.days.iter().map(to_record).collect()
    }

    /// Records whose day falls in `start..=end`.
    pub fn records_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<ActivityRecord> {
        if start > end {
            return Vec::new();
        }
        self.days.range(start..=end).map(to_record).collect()
    }
}

fn to_record((date, entry): (&NaiveDate, &DayEntry)) -> ActivityRecord {
    ActivityRecord {
        date: *date,
        count: entry.count,
        notes: entry.notes.clone(),
    }
}
