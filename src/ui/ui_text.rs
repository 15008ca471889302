use std::sync::LazyLock;

pub const ICON_START: &str = "▷";
pub const ICON_STOP: &str = "■";
pub const ICON_RESULT: &str = "📈";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_WALLET: &str = "💰";

pub struct UiText {
    pub app_title: String,
    pub label_balance: String,

    // --- Start / stop controls ---
    pub start_idle: String,
    pub start_processing: &'static str,
    pub stop: String,
    pub stop_not_implemented: &'static str,

    // --- Configuration panel ---
    pub config_heading: String,
    pub label_asset: String,
    pub label_ai_model: String,
    pub label_strategy: String,
    pub label_entry_value: String,
    pub label_target_value: String,
    pub label_stop_loss: String,
    pub label_current_pnl: String,

    // --- Status panel ---
    pub status_heading: String,
    pub status_placeholder: String,
    pub label_live_pnl: String,
    pub pnl_placeholder: String,

    // --- Result dialog ---
    pub dialog_header_result: String,
    pub dialog_header_error: String,
    pub dialog_ok: String,

    // --- Chart area ---
    pub chart_loading: String,
    pub chart_init_failed: String,
    pub chart_load_failed: String,
    pub chart_no_data: String,
    pub chart_not_ready: String,
    pub chart_retry: String,
    pub plot_x_axis: String,
    pub plot_y_axis: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Backtest Dashboard".to_string(),
    label_balance: format!("{} Balance:", ICON_WALLET),

    start_idle: format!("{} START", ICON_START),
    start_processing: "Processing...",
    stop: format!("{} STOP", ICON_STOP),
    stop_not_implemented: "The STOP function is not implemented yet.",

    config_heading: "Operation Setup".to_string(),
    label_asset: "Asset".to_string(),
    label_ai_model: "AI Model".to_string(),
    label_strategy: "Strategy".to_string(),
    label_entry_value: "Entry Value".to_string(),
    label_target_value: "Target".to_string(),
    label_stop_loss: "Stop Loss".to_string(),
    label_current_pnl: "Current P&L:".to_string(),

    status_heading: "Operation Status".to_string(),
    status_placeholder: "Live monitoring is not available in this version.".to_string(),
    label_live_pnl: "Live P&L:".to_string(),
    pnl_placeholder: "--".to_string(),

    dialog_header_result: format!("{} Result", ICON_RESULT),
    dialog_header_error: format!("{} Error", ICON_WARNING),
    dialog_ok: "OK".to_string(),

    chart_loading: "Loading chart data...".to_string(),
    chart_init_failed: "Error initializing the chart.".to_string(),
    chart_load_failed: "Error loading chart data:".to_string(),
    chart_no_data: "No chart data available for".to_string(),
    chart_not_ready: "Chart not initialized.".to_string(),
    chart_retry: "Retry".to_string(),
    plot_x_axis: "Time".to_string(),
    plot_y_axis: "Price".to_string(),
});
