//! # Loading and Error States
//!
//! Placeholders shown while a query has nothing to render.

use crate::core::error::AppError;
use crate::ui::theme::Theme;

/// Render a centered loading line
pub fn render_loading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(theme.dim, text);
        });
    });
}

/// Render a fetch error in place of the content it would have shown
pub fn render_error(ui: &mut egui::Ui, error: &AppError, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.error, error.to_string());
    });
}
