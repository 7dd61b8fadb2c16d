//! # Chart Tab
//!
//! Close-price line over the coin's recent buckets, refreshed every 10 seconds.

use crate::app::App;
use crate::query::QueryKey;
use crate::ui::chart::render_line_chart;
use crate::ui::theme::Theme;
use crate::ui::widgets::status::{render_error, render_loading};
use shared::chart::line_series;
use shared::dto::HistoricalPrice;

pub fn render(ui: &mut egui::Ui, app: &App, theme: &Theme, coin_id: &str) {
    let snapshot = app.queries.snapshot::<Vec<HistoricalPrice>>(&QueryKey::ohlcv(coin_id));
    match (&snapshot.data, &snapshot.error) {
        (Some(history), _) => render_line_chart(ui, &line_series(history), theme),
        (None, Some(error)) => render_error(ui, error, theme),
        (None, None) => render_loading(ui, "Loading chart...", theme),
    }
}
