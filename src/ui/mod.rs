mod chart_view;
mod panel_switcher;
mod panels;
mod parameter_form;
mod plot_layers;
mod result_presenter;
mod styles;
mod ui_config;
mod ui_text;

pub use chart_view::{
    CandleSeries, ChartAction, ChartHost, ChartStatus, ChartSurface, ChartView, container_has_area,
};
pub use panel_switcher::PanelSwitcher;
pub(crate) use panels::{PanelAction, render_config_panel, render_panel_tabs, render_status_panel};
pub use parameter_form::{FormEvent, ParameterForm};
pub(crate) use plot_layers::{CandlestickLayer, LayerContext, PlotLayer};
pub use result_presenter::{Dialog, DialogTone, ResultPresenter};
pub(crate) use styles::{ToneColor, UiStyleExt, colored_subsection_heading};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
