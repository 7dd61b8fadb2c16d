//! # Tab Links
//!
//! Price/Chart switches under the coin overview. Which one is active is read
//! from the current path, not stored separately.

use crate::app::router::{is_tab_active, tab_path, CoinTab};
use crate::app::App;
use crate::ui::theme::Theme;

/// One rendered tab link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLink {
    pub tab: CoinTab,
    pub path: String,
    pub active: bool,
}

/// Links for every tab of `coin_id`, marked against `current_path`.
pub fn tab_links(coin_id: &str, current_path: &str) -> Vec<TabLink> {
    CoinTab::all()
        .iter()
        .map(|&tab| TabLink {
            tab,
            path: tab_path(coin_id, tab),
            active: is_tab_active(current_path, tab),
        })
        .collect()
}

/// Render the tab links
pub fn render_tabs(ui: &mut egui::Ui, coin_id: &str, current_path: &str, app: &mut App, theme: &Theme) {
    let links = tab_links(coin_id, current_path);
    ui.columns(links.len(), |columns| {
        for (column, link) in columns.iter_mut().zip(&links) {
            let color = if link.active { theme.accent } else { theme.normal };
            let text = egui::RichText::new(link.tab.title().to_uppercase()).color(color);
            column.vertical_centered_justified(|ui| {
                if ui.add(egui::Button::new(text).selected(link.active)).clicked() && !link.active {
                    app.open_tab(coin_id, link.tab);
                }
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_path_activates_price_tab() {
        let links = tab_links("btc-bitcoin", "/btc-bitcoin/price");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].tab, CoinTab::Price);
        assert!(links[0].active);
        assert!(!links[1].active);
        assert_eq!(links[1].path, "/btc-bitcoin/chart");
    }

    #[test]
    fn test_chart_path_activates_chart_tab() {
        let links = tab_links("btc-bitcoin", "/btc-bitcoin/chart");
        assert!(!links[0].active);
        assert!(links[1].active);
    }

    #[test]
    fn test_no_tab_active_on_detail_root() {
        assert!(tab_links("btc-bitcoin", "/btc-bitcoin").iter().all(|link| !link.active));
    }
}
