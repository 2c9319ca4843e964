use crate::errors::SetupError;
use crate::models::{ActivityRecord, RawActivityRecord};
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

/// Reads seed records from a JSON array of `{date, count, notes?}`.
///
/// A missing file is an empty seed. Any other failure, including one bad date, rejects the whole file.
pub async fn load_seed(path: &Path) -> Result<Vec<ActivityRecord>, SetupError> {
    match fs::read(path).await {
        Ok(bytes) => parse_seed(&bytes).inspect_err(|err| {
            error!("failed to parse seed file {}: {err}", path.display());
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("seed file {} not found, starting empty", path.display());
            Ok(Vec::new())
        }
        Err(err) => {
            error!("failed to read seed file {}: {err}", path.display());
            Err(err.into())
        }
    }
}

pub fn parse_seed(bytes: &[u8]) -> Result<Vec<ActivityRecord>, SetupError> {
    let raw: Vec<RawActivityRecord> = serde_json::from_slice(bytes)?;
    raw.into_iter()
        .map(|record| ActivityRecord::try_from(record).map_err(SetupError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalendarError;
    use chrono::NaiveDate;

    #[test]
    fn parses_records_with_optional_fields() {
        let records = parse_seed(
            br#"[
                {"date": "2024-03-14", "count": 2},
                {"date": "2024-03-15T08:00:00Z", "count": 5, "notes": "Completed daily tasks"},
                {"date": "2024-03-16"}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(records[1].notes.as_deref(), Some("Completed daily tasks"));
        assert_eq!(records[2].count, 0);
    }

    #[test]
    fn one_bad_date_rejects_the_seed() {
        let err = parse_seed(br#"[{"date": "2024-03-14", "count": 2}, {"date": "soon", "count": 1}]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            SetupError::Calendar(CalendarError::InvalidDate(value)) if value == "soon"
        ));
    }

    #[test]
    fn negative_counts_are_rejected() {
        let err = parse_seed(br#"[{"date": "2024-03-14", "count": -1}]"#).unwrap_err();
        assert!(matches!(err, SetupError::Json(_)));
    }

    #[tokio::test]
    async fn missing_seed_file_is_empty() {
        let path = std::env::temp_dir().join(format!("activity_seed_missing_{}.json", std::process::id()));
        let records = load_seed(&path).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn loads_seed_from_disk() {
        let path = std::env::temp_dir().join(format!("activity_seed_{}.json", std::process::id()));
        fs::write(&path, br#"[{"date": "2024-01-01", "count": 1}]"#)
            .await
            .unwrap();

        let records = load_seed(&path).await.unwrap();
        let _ = fs::remove_file(&path).await;
        assert_eq!(records.len(), 1);
    }
}
