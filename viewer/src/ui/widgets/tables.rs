//! # Tables
//!
//! Striped grids built from prepared cells. Callers turn their records into
//! [`egui::RichText`] rows; this module owns the header styling and layout.

use crate::ui::theme::Theme;

pub type Row = Vec<egui::RichText>;

/// Striped grid with an accented header row. Short rows leave trailing
/// cells empty.
pub fn render_table(ui: &mut egui::Ui, id: &str, headers: &[&str], rows: &[Row], theme: &Theme) {
    egui::Grid::new(id)
        .num_columns(headers.len())
        .spacing([12.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            for title in headers {
                ui.label(egui::RichText::new(*title).strong().color(theme.accent));
            }
            ui.end_row();

            for row in rows {
                for column in 0..headers.len() {
                    match row.get(column) {
                        Some(cell) => ui.label(cell.clone()),
                        None => ui.label(""),
                    };
                }
                ui.end_row();
            }
        });
}

/// Dimmed centered note shown instead of an empty table
pub fn render_empty_note(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.colored_label(theme.dim, text);
    });
}

/// `Label: n  |  Label: n` summary line
pub fn counts_line(counts: &[(&str, usize)]) -> String {
    counts
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect::<Vec<_>>()
        .join("  |  ")
}
