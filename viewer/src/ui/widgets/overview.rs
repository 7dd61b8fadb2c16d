//! # Overview Box
//!
//! A row of label/value pairs on a dark rounded panel, used for the coin
//! summary and the supply figures.

use crate::ui::theme::Theme;

/// Render label/value pairs as evenly spaced columns
pub fn render_overview(ui: &mut egui::Ui, items: &[(&str, String)], theme: &Theme) {
    egui::Frame::default()
        .fill(theme.panel)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(20, 10))
        .show(ui, |ui| {
            ui.columns(items.len().max(1), |columns| {
                for (column, (label, value)) in columns.iter_mut().zip(items) {
                    column.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(label.to_uppercase()).small().color(theme.dim));
                        ui.label(egui::RichText::new(value).color(theme.normal));
                    });
                }
            });
        });
}
