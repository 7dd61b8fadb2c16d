//! Query inspector window (toggle with Ctrl+D)
//!
//! Lists every cache entry with its status, observers and data age.

use crate::app::App;
use crate::query::{QueryInfo, QueryStatus};
use crate::ui::theme::Theme;
use crate::ui::widgets::tables::{counts_line, render_empty_note, render_table, Row};
use std::time::Duration;

/// Status column text: `fetching` wins over the settled status.
pub fn status_text(info: &QueryInfo) -> &'static str {
    if info.is_fetching {
        "fetching"
    } else {
        info.status.label()
    }
}

/// Data age column text, e.g. `4s`, `-` before the first success.
pub fn age_text(age: Option<Duration>) -> String {
    match age {
        Some(age) if age.as_secs() >= 60 => format!("{}m {}s", age.as_secs() / 60, age.as_secs() % 60),
        Some(age) => format!("{}s", age.as_secs()),
        None => "-".to_string(),
    }
}

const COLUMNS: [&str; 6] = ["Key", "Status", "Observers", "Fetches", "Age", "Error"];

/// Render the inspector as an egui window
pub fn render_query_inspector(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    let entries = app.queries.entries_info();
    let mut open = true;

    egui::Window::new("Query Inspector")
        .open(&mut open)
        .collapsible(true)
        .resizable(true)
        .default_size([520.0, 320.0])
        .show(ctx, |ui| {
            let fetching = entries.iter().filter(|info| info.is_fetching).count();
            let failed = entries.iter().filter(|info| info.status == QueryStatus::Error).count();
            ui.label(counts_line(&[
                ("Entries", entries.len()),
                ("Fetching", fetching),
                ("Errors", failed),
            ]));
            ui.label(format!("GC after {}s unobserved", app.queries.gc_time().as_secs()));
            ui.separator();

            if entries.is_empty() {
                render_empty_note(ui, "Cache is empty", theme);
                return;
            }

            let rows: Vec<Row> = entries.iter().map(|info| entry_row(info, theme)).collect();
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_table(ui, "query_inspector", &COLUMNS, &rows, theme);
            });
        });

    if !open {
        app.toggle_inspector();
    }
}

fn entry_row(info: &QueryInfo, theme: &Theme) -> Row {
    let status_color = match info.status {
        _ if info.is_fetching => theme.accent,
        QueryStatus::Loading => theme.dim,
        QueryStatus::Error => theme.error,
        QueryStatus::Success => theme.price_up,
    };
    let key_color = if info.observers == 0 { theme.dim } else { theme.normal };

    vec![
        egui::RichText::new(info.key.to_string()).monospace().color(key_color),
        egui::RichText::new(status_text(info)).color(status_color),
        egui::RichText::new(info.observers.to_string()),
        egui::RichText::new(info.fetch_count.to_string()),
        egui::RichText::new(age_text(info.data_age)),
        egui::RichText::new(info.error.as_deref().unwrap_or_default()).color(theme.error),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryKey;

    fn info(status: QueryStatus, is_fetching: bool) -> QueryInfo {
        QueryInfo {
            key: QueryKey::all_coins(),
            status,
            is_fetching,
            observers: 1,
            fetch_count: 1,
            data_age: None,
            error: None,
        }
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(&info(QueryStatus::Success, false)), "success");
        assert_eq!(status_text(&info(QueryStatus::Success, true)), "fetching");
        assert_eq!(status_text(&info(QueryStatus::Loading, false)), "loading");
        assert_eq!(status_text(&info(QueryStatus::Error, false)), "error");
    }

    #[test]
    fn test_age_text() {
        assert_eq!(age_text(None), "-");
        assert_eq!(age_text(Some(Duration::from_millis(4_900))), "4s");
        assert_eq!(age_text(Some(Duration::from_secs(125))), "2m 5s");
    }

    #[test]
    fn test_row_fills_every_column() {
        let theme = Theme::default();
        let mut failed = info(QueryStatus::Error, false);
        failed.error = Some("Network error: offline".to_string());
        let row = entry_row(&failed, &theme);
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0].text(), "[\"allCoins\"]");
        assert_eq!(row[5].text(), "Network error: offline");
    }
}
