use crate::activity_log::{ActivityLog, DEFAULT_NOTE_LIMIT};
use crate::calendar::{build_grid, parse_date, trailing_year_start, window_start};
use crate::errors::{AppError, CalendarError};
use crate::models::{
    ActivityRecord, ActivityStats, ContributionGrid, DayCell, NoteEntry, NoteRequest, NotesQuery,
    RecordActivityRequest, TodayQuery,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = local_today();
    let log = state.log.lock().await;
    let grid = grid_for(&log, today)?;
    let stats = build_stats(&grid);
    let notes = log.recent_notes(DEFAULT_NOTE_LIMIT);
    Ok(Html(render_index(&grid, &stats, &notes)))
}

pub async fn add_today(State(state): State<AppState>) -> Redirect {
    let today = local_today();
    let count = state.log.lock().await.record(today, 1);
    info!(%today, count, "recorded activity");
    Redirect::to("/")
}

pub async fn get_today(State(state): State<AppState>) -> Json<DayCell> {
    let today = local_today();
    let entry = state.log.lock().await.entry(today);
    Json(DayCell::from_entry(today, entry))
}

pub async fn record_activity(
    State(state): State<AppState>,
    Json(payload): Json<RecordActivityRequest>,
) -> Result<Json<DayCell>, AppError> {
    let today = local_today();
    let date = match payload.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => today,
    };
    ensure_not_future(date, today)?;

    let amount = payload.count.unwrap_or(1);
    let mut log = state.log.lock().await;
    let count = log.record(date, amount);
    info!(%date, amount, count, "recorded activity");

    Ok(Json(DayCell::from_entry(date, log.entry(date))))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<ContributionGrid>, AppError> {
    let today = resolve_today(&query)?;
    let log = state.log.lock().await;
    let grid = grid_for(&log, today)?;
    debug!(%today, weeks = grid.weeks.len(), "built calendar");
    Ok(Json(grid))
}

pub async fn get_records(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<Vec<ActivityRecord>>, AppError> {
    let today = resolve_today(&query)?;
    let start = trailing_year_start(today)?;
    let log = state.log.lock().await;
    Ok(Json(log.records_between(start, today)))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<ActivityStats>, AppError> {
    let today = resolve_today(&query)?;
    let log = state.log.lock().await;
    Ok(Json(build_stats(&grid_for(&log, today)?)))
}

pub async fn get_notes(
    State(state): State<AppState>,
    Query(query): Query<NotesQuery>,
) -> Json<Vec<NoteEntry>> {
    let limit = query.limit.unwrap_or(DEFAULT_NOTE_LIMIT);
    Json(state.log.lock().await.recent_notes(limit))
}

pub async fn put_note(
    State(state): State<AppState>,
    Json(payload): Json<NoteRequest>,
) -> Result<Json<NoteEntry>, AppError> {
    let date = parse_date(&payload.date)?;
    ensure_not_future(date, local_today())?;

    let note = payload.note.trim();
    if note.is_empty() {
        return Err(AppError::bad_request("note must not be empty"));
    }

    let replaced = state.log.lock().await.set_note(date, note);
    info!(%date, replaced = replaced.is_some(), "saved note");

    Ok(Json(NoteEntry {
        date,
        note: note.to_string(),
    }))
}

/// Builds the grid from the records inside `today`'s window only.
fn grid_for(log: &ActivityLog, today: NaiveDate) -> Result<ContributionGrid, CalendarError> {
    let records = log.records_between(window_start(today)?, today);
    build_grid(&records, today)
}

fn resolve_today(query: &TodayQuery) -> Result<NaiveDate, CalendarError> {
    match query.today.as_deref() {
        Some(value) => parse_date(value),
        None => Ok(local_today()),
    }
}

fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> Result<(), AppError> {
    if date > today {
        return Err(AppError::bad_request(format!("{date} is after today ({today})")));
    }
    Ok(())
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
