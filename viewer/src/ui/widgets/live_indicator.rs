//! # Live Update Indicator
//!
//! Pulsing dot next to data that refreshes on an interval.

use crate::ui::theme::Theme;

/// Render live update indicator. Pulses while a refetch is on the wire.
pub fn render_live_indicator(ui: &mut egui::Ui, is_fetching: bool, theme: &Theme) {
    let now = ui.input(|i| i.time);
    let pulse = (now * 2.0) as u64 % 2;

    if is_fetching && pulse == 0 {
        ui.colored_label(theme.price_up, "○ LIVE");
    } else {
        ui.colored_label(theme.price_up, "● LIVE");
    }
}
