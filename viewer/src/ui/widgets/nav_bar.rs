//! # Navigation Bar
//!
//! Back/forward arrows, an editable path bar and the query inspector toggle.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;

/// Render the navigation bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(4.0, 0.0);

        if ui
            .add_enabled(state.history.can_go_back(), egui::Button::new("<"))
            .on_hover_text("Back (Alt+Left)")
            .clicked()
        {
            app.back();
        }
        if ui
            .add_enabled(state.history.can_go_forward(), egui::Button::new(">"))
            .on_hover_text("Forward (Alt+Right)")
            .clicked()
        {
            app.forward();
        }
        if ui.button("Home").clicked() {
            app.navigate(crate::app::Location::new("/"));
        }

        ui.add_space(8.0);

        let mut path_input = state.path_input.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut path_input)
                .desired_width(ui.available_width() - 90.0)
                .hint_text("/btc-bitcoin/chart"),
        );
        if response.changed() {
            app.state.write().path_input = path_input;
        }
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if submitted || ui.button("Go").clicked() {
            app.submit_path_input();
        }

        let label = egui::RichText::new("Queries").color(if state.inspector_visible {
            theme.accent
        } else {
            theme.dim
        });
        if ui
            .add(egui::Button::new(label).selected(state.inspector_visible))
            .on_hover_text("Query inspector (Ctrl+D)")
            .clicked()
        {
            app.toggle_inspector();
        }
    });
}
