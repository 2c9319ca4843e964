use crate::models::{ActivityStats, ContributionGrid};

pub fn build_stats(grid: &ContributionGrid) -> ActivityStats {
    let mut total_activities = 0u64;
    let mut active_days = 0u32;
    let mut run = 0u32;
    let mut longest_streak = 0u32;

    for cell in grid.days() {
        total_activities = total_activities.saturating_add(u64::from(cell.count));
        if cell.count > 0 {
            active_days += 1;
            run += 1;
            longest_streak = longest_streak.max(run);
        } else {
            run = 0;
        }
    }

    ActivityStats {
        total_activities,
        active_days,
        current_streak: current_streak(grid),
        longest_streak,
    }
}

/// Active days in a row ending today, or ending yesterday while today is still empty.
fn current_streak(grid: &ContributionGrid) -> u32 {
    let counts: Vec<u32> = grid.days().map(|cell| cell.count).collect();
    let Some((&today, earlier)) = counts.split_last() else {
        return 0;
    };

    let trailing = earlier.iter().rev().take_while(|count| **count > 0).count() as u32;
    if today > 0 { trailing + 1 } else { trailing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_grid;
    use crate::models::ActivityRecord;
    use chrono::{Duration, NaiveDate};

    fn streak_records(today: NaiveDate, days_back: &[i64]) -> Vec<ActivityRecord> {
        days_back
            .iter()
            .map(|offset| ActivityRecord::new(today - Duration::days(*offset), 2))
            .collect()
    }

    #[test]
    fn stats_count_totals_and_active_days() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let records = vec![
            ActivityRecord::new(today, 3),
            ActivityRecord::new(today - Duration::days(10), 4),
            ActivityRecord::new(today - Duration::days(11), 0),
            // outside the window
            ActivityRecord::new(today - Duration::days(400), 9),
        ];

        let stats = build_stats(&build_grid(&records, today).unwrap());
        assert_eq!(stats.total_activities, 7);
        assert_eq!(stats.active_days, 2);
    }

    #[test]
    fn current_streak_includes_today() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let records = streak_records(today, &[0, 1, 2, 4]);
        let stats = build_stats(&build_grid(&records, today).unwrap());
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.longest_streak, 3);
    }

    #[test]
    fn current_streak_survives_an_empty_today() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let records = streak_records(today, &[1, 2, 10, 11, 12, 13, 14]);
        let stats = build_stats(&build_grid(&records, today).unwrap());
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.longest_streak, 5);
    }

    #[test]
    fn empty_grid_has_no_streaks() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let stats = build_stats(&build_grid(&[], today).unwrap());
        assert_eq!(stats, ActivityStats {
            total_activities: 0,
            active_days: 0,
            current_streak: 0,
            longest_streak: 0,
        });
    }
}
