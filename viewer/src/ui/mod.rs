//! # GUI Rendering Framework
//!
//! Draws one frame: the navigation bar, the screen selected by the current
//! path, and the query inspector when it is open. Each screen returns its
//! page title, which is mirrored to the native window title.

pub mod chart;
pub mod inspector;
pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Route};
use crate::ui::theme::Theme;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    // Clone so no lock is held while drawing
    let state = match app.state.try_read() {
        Some(state_guard) => state_guard.clone(),
        None => return,
    };

    handle_shortcuts(ctx, app);

    egui::TopBottomPanel::top("nav_bar")
        .frame(egui::Frame::default().fill(theme.colors.background).inner_margin(8.0))
        .show(ctx, |ui| {
            widgets::nav_bar::render_nav_bar(ui, &state, app, theme);
        });

    let mut title = String::new();
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.set_max_width(480.0_f32.min(ui.available_width()));
            title = match state.route() {
                Route::Coins => screens::coins::render(ui, &state, app, theme),
                Route::Coin { coin_id, tab } => screens::coin::render(ui, &state, app, theme, &coin_id, tab),
            };
        });
    });

    if state.inspector_visible {
        inspector::render_query_inspector(ctx, app, theme);
    }

    sync_window_title(ctx, app, &state.window_title, title);
}

fn handle_shortcuts(ctx: &egui::Context, app: &mut App) {
    if ctx.input(|i| i.key_pressed(egui::Key::D) && i.modifiers.ctrl) {
        app.toggle_inspector();
    }
    if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft) && i.modifiers.alt) {
        app.back();
    }
    if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight) && i.modifiers.alt) {
        app.forward();
    }
}

fn sync_window_title(ctx: &egui::Context, app: &App, current: &str, title: String) {
    if title.is_empty() || title == current {
        return;
    }
    tracing::debug!(title = %title, "Window title changed");
    ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
    app.state.write().window_title = title;
}
