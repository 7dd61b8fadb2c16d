//! # Chart Module
//!
//! Chart rendering using egui_plot for the close-price line and the
//! candlestick series. Series are built by `shared::chart`; this module only
//! draws them. Both charts plot buckets by index and label the x axis from
//! the bucket times.

use crate::ui::theme::Theme;
use egui_plot::{GridMark, Line, Plot, PlotPoints, PlotResponse};
use shared::chart::{price_range, CandlePoint, LineSeries};
use std::ops::RangeInclusive;

const CHART_HEIGHT: f32 = 300.0;

/// Candle body width in bucket units
const BODY_WIDTH: f64 = 0.6;

/// Label for an x-axis grid mark, if it falls on a bucket.
fn bucket_label(labels: &[String], mark: f64) -> String {
    if mark < 0.0 || mark.fract() != 0.0 {
        return String::new();
    }
    labels.get(mark as usize).cloned().unwrap_or_default()
}

/// Hover text for the line chart: `$` and two decimals.
pub fn tooltip_label(value: f64) -> String {
    shared::utils::format_usd(value, 2)
}

/// Render the close-price line chart
pub fn render_line_chart(ui: &mut egui::Ui, series: &LineSeries, theme: &Theme) {
    if series.data.is_empty() {
        ui.colored_label(theme.dim, "No chart data available");
        return;
    }

    tracing::trace!(points = series.data.len(), "Rendering line chart");

    let labels = series.categories.clone();
    let points = series.points();

    let response = Plot::new("coin_line_chart")
        .height(CHART_HEIGHT)
        .show_axes([true, false])
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            bucket_label(&labels, mark.value)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(series.name.clone(), PlotPoints::from(points))
                    .color(theme.line)
                    .width(4.0),
            );
        });

    show_hover_value(ui, &response, |idx| {
        let time = series.categories.get(idx)?;
        let value = series.data.get(idx)?;
        Some(format!("{}\n{}", time, tooltip_label(*value)))
    });
}

/// Tooltip for the bucket under the pointer.
fn show_hover_value<R>(
    ui: &egui::Ui,
    response: &PlotResponse<R>,
    label_for: impl Fn(usize) -> Option<String>,
) {
    if !response.response.hovered() {
        return;
    }
    let Some(pointer) = ui.ctx().pointer_hover_pos() else {
        return;
    };
    let value = response.transform.value_from_position(pointer);
    let idx = value.x.round();
    if idx < 0.0 {
        return;
    }
    if let Some(text) = label_for(idx as usize) {
        let _ = response.response.clone().on_hover_text_at_pointer(text);
    }
}

/// Render candlestick chart from OHLC points
pub fn render_candlestick_chart(ui: &mut egui::Ui, candles: &[CandlePoint], theme: &Theme) {
    if candles.is_empty() {
        ui.colored_label(theme.dim, "No chart data available");
        return;
    }

    tracing::trace!(candle_count = candles.len(), "Rendering candlestick chart");

    let labels: Vec<String> = candles.iter().map(|candle| candle.x.clone()).collect();
    let (min_price, max_price) = price_range(candles).unwrap_or((0.0, 1.0));

    let response = Plot::new("coin_candlestick_chart")
        .height(CHART_HEIGHT)
        .include_y(min_price)
        .include_y(max_price)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            bucket_label(&labels, mark.value)
        })
        .show(ui, |plot_ui| {
            for (idx, candle) in candles.iter().enumerate() {
                let x = idx as f64;
                let color = if candle.is_bullish() {
                    theme.price_up
                } else {
                    theme.price_down
                };

                // Wick (high-low line)
                plot_ui.line(
                    Line::new("wick", PlotPoints::from(vec![[x, candle.low()], [x, candle.high()]]))
                        .color(color)
                        .width(1.0),
                );

                let body_top = candle.open().max(candle.close());
                let body_bottom = candle.open().min(candle.close());
                if body_top > body_bottom {
                    plot_ui.line(
                        Line::new("body", PlotPoints::from(vec![[x, body_bottom], [x, body_top]]))
                            .color(color)
                            .width(8.0),
                    );
                } else {
                    // Doji
                    plot_ui.line(
                        Line::new(
                            "doji",
                            PlotPoints::from(vec![
                                [x - BODY_WIDTH / 2.0, candle.close()],
                                [x + BODY_WIDTH / 2.0, candle.close()],
                            ]),
                        )
                        .color(color)
                        .width(2.0),
                    );
                }
            }
        });

    show_hover_value(ui, &response, |idx| {
        let candle = candles.get(idx)?;
        Some(format!(
            "{}\nO {}  H {}  L {}  C {}",
            candle.x,
            tooltip_label(candle.open()),
            tooltip_label(candle.high()),
            tooltip_label(candle.low()),
            tooltip_label(candle.close()),
        ))
    });
}
