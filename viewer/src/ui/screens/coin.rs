//! # Coin Detail Screen
//!
//! Metadata and live ticker for one coin, followed by the Price/Chart tab
//! links and the active tab's chart. The ticker refreshes every 5 seconds
//! while this screen is mounted.

use crate::app::router::CoinTab;
use crate::app::{App, AppState};
use crate::query::{QueryKey, QuerySnapshot};
use crate::ui::theme::Theme;
use crate::ui::widgets::live_indicator::render_live_indicator;
use crate::ui::widgets::overview::render_overview;
use crate::ui::widgets::status::{render_error, render_loading};
use crate::ui::widgets::tabs::render_tabs;
use crate::ui::screens::{chart, price};
use shared::dto::{CoinInfo, Ticker};
use shared::utils::{format_supply, format_usd};

pub const LOADING_TITLE: &str = "Loading...";

/// Page title: the name carried by navigation, else a loading marker while
/// the detail queries are pending, else the fetched name.
pub fn detail_title(nav_name: Option<&str>, loading: bool, info_name: Option<&str>, coin_id: &str) -> String {
    match (nav_name, loading) {
        (Some(name), _) => name.to_string(),
        (None, true) => LOADING_TITLE.to_string(),
        (None, false) => info_name.unwrap_or(coin_id).to_string(),
    }
}

/// Rank, symbol and USD price (three decimals).
pub fn summary_items(info: &CoinInfo, ticker: &Ticker) -> Vec<(&'static str, String)> {
    let price = ticker
        .usd()
        .map(|quote| format_usd(quote.price, 3))
        .unwrap_or_else(|| "$-".to_string());
    vec![
        ("Rank", info.rank.to_string()),
        ("Symbol", info.symbol.clone()),
        ("Price", price),
    ]
}

pub fn supply_items(ticker: &Ticker) -> Vec<(&'static str, String)> {
    vec![
        ("Total Supply", format_supply(ticker.total_supply)),
        ("Max Supply", format_supply(ticker.max_supply)),
    ]
}

/// Render the detail screen. Returns the page title.
pub fn render(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut App,
    theme: &Theme,
    coin_id: &str,
    tab: Option<CoinTab>,
) -> String {
    let info = app.queries.snapshot::<CoinInfo>(&QueryKey::info(coin_id));
    let tickers = app.queries.snapshot::<Ticker>(&QueryKey::tickers(coin_id));
    let loading = info.is_loading() || tickers.is_loading();

    let title = detail_title(
        state.location().nav_name(),
        loading,
        info.data.as_deref().map(|info| info.name.as_str()),
        coin_id,
    );

    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new(&title).size(36.0).color(theme.accent));
    });
    ui.add_space(12.0);

    if loading {
        render_loading(ui, "Loading...", theme);
        return title;
    }

    match (&info.data, &tickers.data) {
        (Some(info_data), Some(ticker)) => {
            render_details(ui, info_data, ticker, &tickers, theme);
        }
        _ => {
            render_failures(ui, &info, &tickers, theme);
        }
    }

    ui.add_space(16.0);
    render_tabs(ui, coin_id, &state.location().path, app, theme);
    ui.add_space(12.0);

    match tab {
        Some(CoinTab::Price) => price::render(ui, app, theme, coin_id),
        Some(CoinTab::Chart) => chart::render(ui, app, theme, coin_id),
        None => {}
    }

    title
}

fn render_details(
    ui: &mut egui::Ui,
    info: &CoinInfo,
    ticker: &Ticker,
    snapshot: &QuerySnapshot<Ticker>,
    theme: &Theme,
) {
    render_overview(ui, &summary_items(info, ticker), theme);

    if let Some(quote) = ticker.usd() {
        ui.horizontal(|ui| {
            let (change, color) = theme.format_price_change(quote.percent_change_24h);
            ui.colored_label(theme.dim, "24h");
            ui.colored_label(color, change);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                render_live_indicator(ui, snapshot.is_fetching, theme);
            });
        });
    }

    ui.add_space(12.0);
    ui.label(egui::RichText::new(info.description_text()).color(theme.normal));
    ui.add_space(12.0);

    render_overview(ui, &supply_items(ticker), theme);

    if let Some(error) = &snapshot.error {
        ui.colored_label(theme.dim, format!("Ticker refresh failed: {}", error));
    }
}

fn render_failures(
    ui: &mut egui::Ui,
    info: &QuerySnapshot<CoinInfo>,
    tickers: &QuerySnapshot<Ticker>,
    theme: &Theme,
) {
    if info.data.is_none() {
        if let Some(error) = &info.error {
            render_error(ui, error, theme);
        }
    }
    if tickers.data.is_none() {
        if let Some(error) = &tickers.error {
            render_error(ui, error, theme);
        }
    }
}
