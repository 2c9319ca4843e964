use crate::models::{ActivityStats, ContributionGrid, DayCell, NoteEntry};
const DAY_LABELS: [&str; 7] = ["", "Mon", "", "Wed", "", "Fri", ""];

pub fn render_index(grid: &ContributionGrid, stats: &ActivityStats, notes: &[NoteEntry]) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", &grid.end.format("%B %-d, %Y").to_string())
        .replace("{{TOTAL}}", &stats.total_activities.to_string())
        .replace("{{ACTIVE}}", &stats.active_days.to_string())
        .replace("{{CURRENT}}", &streak_label(stats.current_streak))
        .replace("{{LONGEST}}", &streak_label(stats.longest_streak))
        .replace("{{GRID}}", &render_grid(grid))
        .replace("{{NOTES}}", &render_notes(notes))
}

fn render_grid(grid: &ContributionGrid) -> String {
    let mut html = String::from("<div class=\"days\">");
    for label in DAY_LABELS {
        html.push_str(&format!("<span>{label}</span>"));
    }
    html.push_str("</div>");

    for week in &grid.weeks {
        html.push_str("<div class=\"week\">");
        html.push_str(&format!("<span class=\"month\">{}</span>", week.month_label.unwrap_or("")));
        for cell in &week.days {
            html.push_str(&format!(
                "<span class=\"cell level-{}\" title=\"{}\"></span>",
                cell.intensity,
                escape(&cell_title(cell))
            ));
        }
        html.push_str("</div>");
    }
    html
}

fn render_notes(notes: &[NoteEntry]) -> String {
    if notes.is_empty() {
        return "<p class=\"hint\">No notes yet.</p>".to_string();
    }

    let mut html = String::from("<ul>");
    for note in notes {
        html.push_str(&format!(
            "<li><strong>{}</strong> {}</li>",
            note.date.format("%B %-d, %Y"),
            escape(&note.note)
        ));
    }
    html.push_str("</ul>");
    html
}

fn cell_title(cell: &DayCell) -> String {
    let noun = if cell.count == 1 { "activity" } else { "activities" };
    let mut title = format!("{}: {} {noun}", cell.date.format("%b %-d, %Y"), cell.count);
    if let Some(notes) = &cell.notes {
        title.push_str(" - ");
        title.push_str(notes);
    }
    title
}

fn streak_label(days: u32) -> String {
    if days == 1 { "1 day".to_string() } else { format!("{days} days") }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Activity Tracker</title>
  <style>
    body { font-family: sans-serif; margin: 32px; }
    .stats { display: flex; gap: 24px; }
    .graph { display: flex; gap: 2px; overflow-x: auto; }
    .days, .week { display: flex; flex-direction: column; gap: 2px; }
    .days span, .week span { width: 12px; height: 12px; font-size: 9px; }
    .days span { width: 28px; }
    .month { overflow: visible; white-space: nowrap; }
    .cell { border-radius: 2px; }
    .level-0 { background: #ebedf0; }
    .level-1 { background: #9be9a8; }
    .level-2 { background: #40c463; }
    .level-3 { background: #30a14e; }
    .level-4 { background: #216e39; }
    .hint { color: #777; }
  </style>
</head>
<body>
  <h1>Activity Tracker</h1>
  <p class="hint">Trailing year ending {{TODAY}}.</p>

  <section class="stats">
    <div><strong>{{TOTAL}}</strong> total activities</div>
    <div><strong>{{ACTIVE}}</strong> active days</div>
    <div><strong>{{CURRENT}}</strong> current streak</div>
    <div><strong>{{LONGEST}}</strong> best streak</div>
  </section>

  <section class="graph">{{GRID}}</section>

  <form method="post" action="/activity/add">
    <button type="submit">Log activity for today</button>
  </form>

  <section>
    <h2>Recent notes</h2>
    {{NOTES}}
  </section>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_grid;
    use crate::models::ActivityRecord;
    use crate::stats::build_stats;
    use chrono::NaiveDate;

    #[test]
    fn grid_renders_one_cell_per_day() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let records = vec![ActivityRecord::new(today, 5).with_notes("<b>shipped</b>")];
        let grid = build_grid(&records, today).unwrap();

        let html = render_grid(&grid);
        assert_eq!(html.matches("class=\"cell ").count(), 370);
        assert_eq!(html.matches("cell level-4").count(), 1);
        assert!(html.contains("&lt;b&gt;shipped&lt;/b&gt;"));
        assert!(!html.contains("<b>shipped"));
        assert!(html.contains("<span>Mon</span>"));
        assert!(html.contains("<span class=\"month\">Apr</span>"));
    }

    #[test]
    fn index_fills_every_placeholder() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let grid = build_grid(&[ActivityRecord::new(today, 1)], today).unwrap();
        let stats = build_stats(&grid);
        let notes = vec![NoteEntry {
            date: today,
            note: "Great progress today!".to_string(),
        }];

        let html = render_index(&grid, &stats, &notes);
        assert!(!html.contains("{{"));
        assert!(html.contains("March 15, 2024"));
        assert!(html.contains("1 day"));
        assert!(html.contains("Great progress today!"));
    }
}
