//! # Coins Screen
//!
//! Listing of the top coins with their icons. Each row opens the coin's
//! detail view and hands it the display name.

use crate::app::router::{coin_path, NavState};
use crate::app::state::COINS_TITLE;
use crate::app::{App, AppState};
use crate::query::QueryKey;
use crate::ui::theme::Theme;
use crate::ui::widgets::status::render_error;
use shared::dto::CoinSummary;
use shared::utils::icon_url;

/// Rows shown from the listing
pub const LISTING_LIMIT: usize = 20;

const ICON_SIZE: f32 = 35.0;

/// One rendered listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinRow {
    pub id: String,
    pub name: String,
    pub path: String,
    pub icon_url: String,
}

impl CoinRow {
    pub fn nav_state(&self) -> NavState {
        NavState {
            name: self.name.clone(),
        }
    }
}

/// Rows for the first [`LISTING_LIMIT`] coins, in listing order.
pub fn coin_rows(coins: &[CoinSummary], icon_base: &str) -> Vec<CoinRow> {
    coins
        .iter()
        .take(LISTING_LIMIT)
        .map(|coin| CoinRow {
            id: coin.id.clone(),
            name: coin.name.clone(),
            path: coin_path(&coin.id),
            icon_url: icon_url(icon_base, &coin.symbol),
        })
        .collect()
}

/// Render the listing. Returns the page title.
pub fn render(ui: &mut egui::Ui, _state: &AppState, app: &mut App, theme: &Theme) -> String {
    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new(COINS_TITLE).size(36.0).color(theme.accent));
    });
    ui.add_space(12.0);

    let snapshot = app.queries.snapshot::<Vec<CoinSummary>>(&QueryKey::all_coins());
    match (&snapshot.data, &snapshot.error) {
        (Some(coins), _) => {
            let rows = coin_rows(coins, &app.config.icon_base);
            for row in &rows {
                render_row(ui, row, app, theme);
                ui.add_space(8.0);
            }
        }
        (None, Some(error)) => render_error(ui, error, theme),
        (None, None) => {
            ui.vertical_centered(|ui| ui.label("Loading..."));
        }
    }

    COINS_TITLE.to_string()
}

fn render_row(ui: &mut egui::Ui, row: &CoinRow, app: &mut App, theme: &Theme) {
    egui::Frame::default()
        .fill(theme.normal)
        .corner_radius(15.0)
        .inner_margin(egui::Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add(
                    egui::Image::new(row.icon_url.as_str())
                        .fit_to_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE)),
                );
                ui.add_space(10.0);
                let text = egui::RichText::new(format!("{} →", row.name))
                    .color(theme.colors.background)
                    .strong();
                if ui.add(egui::Link::new(text)).on_hover_text(row.path.as_str()).clicked() {
                    tracing::debug!(coin_id = %row.id, "Opening coin");
                    app.open_coin(&row.id, &row.name);
                }
            });
        });
}
