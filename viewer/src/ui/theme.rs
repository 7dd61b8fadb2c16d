//! # GUI Theme
//!
//! Dark slate theme with a violet accent for titles, links and the active tab.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Viewer color palette
#[derive(Debug, Clone)]
pub struct ViewerColors {
    /// Slate background
    pub background: Color32,
    /// Near-white text
    pub text: Color32,
    /// Violet accent
    pub accent: Color32,
    /// Translucent black behind overview boxes
    pub panel: Color32,
    /// Medium gray for secondary text
    pub gray_secondary: Color32,
    /// Dark gray borders
    pub border_dark: Color32,
    /// Sky blue close-price line
    pub line: Color32,
    /// Green for rising candles and gains
    pub green_success: Color32,
    /// Red for falling candles and losses
    pub red_error: Color32,
}

impl Default for ViewerColors {
    fn default() -> Self {
        ViewerColors {
            background: Color32::from_rgb(47, 54, 64),        // #2F3640
            text: Color32::from_rgb(245, 246, 250),           // #F5F6FA
            accent: Color32::from_rgb(156, 136, 255),         // #9C88FF
            panel: Color32::from_black_alpha(128),
            gray_secondary: Color32::from_rgb(150, 150, 150), // #969696
            border_dark: Color32::from_rgb(64, 72, 84),       // #404854
            line: Color32::from_rgb(15, 188, 249),            // #0FBCF9
            green_success: Color32::from_rgb(11, 232, 129),   // #0BE881
            red_error: Color32::from_rgb(255, 94, 87),        // #FF5E57
        }
    }
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ViewerColors,
    /// Normal text color
    pub normal: Color32,
    /// Titles, links and the active tab
    pub accent: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Overview box fill
    pub panel: Color32,
    pub error: Color32,
    /// Rising candle / positive change
    pub price_up: Color32,
    /// Falling candle / negative change
    pub price_down: Color32,
    /// Line chart stroke
    pub line: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = ViewerColors::default();
        Theme {
            normal: colors.text,
            accent: colors.accent,
            dim: colors.gray_secondary,
            panel: colors.panel,
            error: colors.red_error,
            price_up: colors.green_success,
            price_down: colors.red_error,
            line: colors.line,
            colors,
        }
    }
}

impl Theme {
    /// Get color for price change percentage
    pub fn price_change_color(&self, change: f64) -> Color32 {
        if change > 0.0 {
            self.price_up
        } else if change < 0.0 {
            self.price_down
        } else {
            self.dim
        }
    }

    /// Format price change with color
    pub fn format_price_change(&self, change: f64) -> (String, Color32) {
        (shared::utils::format_percent(change), self.price_change_color(change))
    }

    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.faint_bg_color = Color32::from_rgb(53, 61, 72);
        visuals.extreme_bg_color = Color32::from_rgb(36, 42, 50);
        visuals.window_stroke = Stroke::new(1.0, colors.border_dark);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border_dark);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.accent);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(156, 136, 255, 76);
        visuals.selection.stroke = Stroke::new(1.0, colors.accent);
        visuals.hyperlink_color = colors.accent;

        visuals
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();

        // Both variants, so a system theme switch keeps the palette.
        for variant in [EguiTheme::Dark, EguiTheme::Light] {
            let visuals = visuals.clone();
            ctx.style_mut_of(variant, |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(10.0, 5.0);
                style.spacing.window_margin = egui::Margin::same(8);
            });
        }

        tracing::debug!("Applied viewer theme");
    }
}
