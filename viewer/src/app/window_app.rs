//! eframe integration: owns the [`App`] and drives it once per frame.

use super::App;
use crate::core::config::ViewerConfig;
use crate::ui::theme::Theme;
use std::time::Duration;

/// Frames are requested at least this often so interval refetches show up
/// without user input.
const REPAINT_INTERVAL: Duration = Duration::from_millis(250);

pub struct ViewerApp {
    app: App,
    theme: Theme,
}

impl ViewerApp {
    /// Must be called inside the tokio runtime context.
    pub fn new(cc: &eframe::CreationContext<'_>, config: ViewerConfig, inspector_visible: bool) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        Self {
            app: App::new(config, inspector_visible),
            theme,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let processed = self.app.on_tick();
        if processed > 0 {
            ctx.request_repaint();
        }

        crate::ui::render(ctx, &mut self.app, &self.theme);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
