use eframe::egui::{Color32, Stroke};
use egui_plot::{Line, PlotPoints, PlotUi, Polygon};

use crate::config::PLOT_CONFIG;
use crate::domain::{CandleType, ChartPoint};

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub points: &'a [ChartPoint],
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

/// One candle per point, x = position in the series.
pub struct CandlestickLayer;

impl PlotLayer for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for (i, point) in ctx.points.iter().enumerate() {
            draw_candle(plot_ui, i as f64, point);
        }
    }
}

fn draw_candle(ui: &mut PlotUi, x: f64, point: &ChartPoint) {
    let color = match point.get_type() {
        CandleType::Bullish => PLOT_CONFIG.candle_bullish_color,
        CandleType::Bearish => PLOT_CONFIG.candle_bearish_color,
    };

    if point.high > point.low {
        draw_wick_line(ui, x, point.high, point.low, color);
    }

    let (body_bot, body_top_raw) = point.body_range();
    // Doji check
    let body_top = if (body_top_raw - body_bot).abs() < f64::EPSILON {
        body_bot * 1.0001
    } else {
        body_top_raw
    };
    draw_body_rect(ui, x, body_top, body_bot, color);
}

#[inline]
fn draw_wick_line(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(PLOT_CONFIG.candle_wick_width),
    );
}

#[inline]
fn draw_body_rect(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    let half_w = PLOT_CONFIG.candle_width_pct / 2.0;
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    // No stroke: thin candles blur with one.
    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}

/// (min low, max high) over the series, padded. `None` when empty.
pub fn price_bounds(points: &[ChartPoint]) -> Option<(f64, f64)> {
    let (low, high) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.low), hi.max(p.high))
    });
    if !low.is_finite() || !high.is_finite() {
        return None;
    }
    let pad = (high - low).abs().max(high.abs() * 0.001) * PLOT_CONFIG.plot_y_padding_pct;
    Some((low - pad, high + pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChartTime;

    #[test]
    fn bounds_cover_all_wicks_with_padding() {
        let points = vec![
            ChartPoint::new(ChartTime::Unix(0), 10.0, 12.0, 9.0, 11.0),
            ChartPoint::new(ChartTime::Unix(60), 11.0, 15.0, 10.0, 14.0),
        ];
        let (lo, hi) = price_bounds(&points).unwrap();
        assert!(lo < 9.0 && lo > 8.0);
        assert!(hi > 15.0 && hi < 16.0);
        assert_eq!(price_bounds(&[]), None);
    }
}
