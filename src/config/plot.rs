//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- CHART SURFACE ---
    pub chart_background: Color32,
    pub chart_text: Color32,
    pub chart_border: Color32,

    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to time step)
    pub candle_wick_width: f32, // Pixels

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)

    /// Smallest container (in points) we are willing to draw a chart into
    pub min_chart_side: f32,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_warning: Color32,

    pub color_text_neutral: Color32, // Main values (white)
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    // Dark TradingView-like surface
    chart_background: Color32::from_rgb(19, 23, 34), // #131722
    chart_text: Color32::from_rgb(209, 212, 220),     // #d1d4dc
    chart_border: Color32::from_rgb(71, 77, 87),      // #474d57

    candle_bullish_color: Color32::from_rgb(0, 184, 148), // #00b894
    candle_bearish_color: Color32::from_rgb(231, 76, 60), // #e74c3c
    candle_width_pct: 0.8, // 80% width leaves a small gap between candles
    candle_wick_width: 1.0,

    plot_y_padding_pct: 0.02,

    min_chart_side: 1.0,

    // SEMANTICS
    color_profit: Color32::from_rgb(100, 255, 100),
    color_loss: Color32::from_rgb(255, 80, 80),
    color_warning: Color32::from_rgb(255, 165, 0), // Orange, chart data errors

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};
