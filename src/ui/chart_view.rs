use eframe::egui::{Align, Frame, Layout, RichText, Stroke, Ui, Vec2, Vec2b};
use egui_plot::{AxisHints, HPlacement, Plot};

use crate::config::{DF, PLOT_CONFIG};
use crate::data::{BackendClient, ChartDataPromise};
use crate::domain::{ChartDataError, ChartInitError, ChartPoint};
use crate::ui::{CandlestickLayer, LayerContext, PlotLayer, UI_TEXT};
use crate::utils::epoch_sec_to_date_string;

/// What the chart needs from the host before it can exist.
#[derive(Debug, Clone, Copy)]
pub struct ChartHost {
    pub renderer_available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartStatus {
    Uninitialized,
    /// Terminal for the chart only.
    InitFailed(ChartInitError),
    /// Surface exists, nothing requested yet.
    Ready,
    Loading,
    Loaded,
    /// The backend answered with an empty series.
    NoData,
    LoadFailed(ChartDataError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartAction {
    Retry,
}

/// The single candlestick series on the surface.
#[derive(Debug, Default)]
pub struct CandleSeries {
    points: Vec<ChartPoint>,
}

impl CandleSeries {
    pub fn set_data(&mut self, points: Vec<ChartPoint>) {
        self.points = points;
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }
}

#[derive(Debug)]
pub struct ChartSurface {
    size: Vec2,
    series: CandleSeries,
}

impl ChartSurface {
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn series(&self) -> &CandleSeries {
        &self.series
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
    }
}

pub struct ChartView {
    surface: Option<ChartSurface>,
    status: ChartStatus,
    asset: Option<String>,
    pending: Option<ChartDataPromise>,
}

impl Default for ChartView {
    fn default() -> Self {
        Self {
            surface: None,
            status: ChartStatus::Uninitialized,
            asset: None,
            pending: None,
        }
    }
}

impl ChartView {
    pub fn status(&self) -> &ChartStatus {
        &self.status
    }

    pub fn surface(&self) -> Option<&ChartSurface> {
        self.surface.as_ref()
    }

    pub fn asset(&self) -> Option<&str> {
        self.asset.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Creates the surface and its series, sized to `container`.
    pub fn initialize(
        &mut self,
        host: ChartHost,
        container: Option<Vec2>,
    ) -> Result<(), ChartInitError> {
        let result = Self::check_host(host, container);
        match &result {
            Ok(size) => {
                self.surface = Some(ChartSurface {
                    size: *size,
                    series: CandleSeries::default(),
                });
                self.status = ChartStatus::Ready;
                if DF.log_chart_updates {
                    log::info!("Chart surface created at {:.0}x{:.0}", size.x, size.y);
                }
            }
            Err(e) => {
                log::error!("Error initializing the chart: {e}");
                self.surface = None;
                self.status = ChartStatus::InitFailed(e.clone());
            }
        }
        result.map(|_| ())
    }

    fn check_host(host: ChartHost, container: Option<Vec2>) -> Result<Vec2, ChartInitError> {
        if !host.renderer_available {
            return Err(ChartInitError::RendererUnavailable);
        }
        let size = container.ok_or(ChartInitError::ContainerMissing)?;
        if !container_has_area(size) {
            return Err(ChartInitError::ContainerCollapsed {
                width: size.x,
                height: size.y,
            });
        }
        Ok(size)
    }

    /// Starts fetching `asset`. A pending fetch is dropped in favour of this one.
    pub fn load(&mut self, backend: &dyn BackendClient, asset: &str) {
        if self.surface.is_none() {
            log::warn!("Chart not initialized, ignoring load for {asset}");
            return;
        }
        if self.pending.is_some() && DF.log_chart_updates {
            log::info!("Superseding pending chart load with {asset}");
        }
        self.asset = Some(asset.to_string());
        self.pending = Some(backend.fetch_chart_data(asset));
        self.status = ChartStatus::Loading;
    }

    /// Applies a finished fetch. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(promise) = self.pending.take() else {
            return false;
        };
        let result = match promise.try_take() {
            Ok(result) => result,
            Err(still_pending) => {
                self.pending = Some(still_pending);
                return false;
            }
        };
        let asset = self.asset.as_deref().unwrap_or_default();
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };

        self.status = match result {
            Ok(points) if points.is_empty() => {
                surface.series.clear();
                log::warn!("No chart data available for {asset}");
                ChartStatus::NoData
            }
            Ok(points) => {
                if DF.log_chart_updates {
                    log::info!("Loaded {} candles for {asset}", points.len());
                }
                surface.series.set_data(points);
                ChartStatus::Loaded
            }
            Err(e) => {
                log::error!("Error loading chart data for {asset}: {e}");
                ChartStatus::LoadFailed(e)
            }
        };
        true
    }

    /// Resizes the surface to follow its container. Returns true on change.
    pub fn observe_container(&mut self, size: Vec2) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        if surface.size == size || !size.x.is_finite() || !size.y.is_finite() {
            return false;
        }
        if DF.log_resize {
            log::info!(
                "Chart resize {:.0}x{:.0} -> {:.0}x{:.0}",
                surface.size.x,
                surface.size.y,
                size.x,
                size.y
            );
        }
        surface.resize(size);
        true
    }

    pub fn show(&self, ui: &mut Ui) -> Option<ChartAction> {
        let asset = self.asset.as_deref().unwrap_or_default();
        match (&self.status, &self.surface) {
            (ChartStatus::InitFailed(e), _) => {
                centered_message(ui, |ui| {
                    ui.label(RichText::new(&UI_TEXT.chart_init_failed).color(PLOT_CONFIG.color_loss));
                    ui.label(RichText::new(e.to_string()).small().color(PLOT_CONFIG.color_text_subdued));
                });
                None
            }
            (_, None) | (ChartStatus::Uninitialized, _) => {
                centered_message(ui, |ui| {
                    ui.label(RichText::new(&UI_TEXT.chart_not_ready).color(PLOT_CONFIG.chart_text));
                });
                None
            }
            (ChartStatus::Loading, _) => {
                centered_message(ui, |ui| {
                    ui.spinner();
                    ui.label(RichText::new(&UI_TEXT.chart_loading).color(PLOT_CONFIG.chart_text));
                });
                None
            }
            (ChartStatus::LoadFailed(e), _) => {
                let mut action = None;
                centered_message(ui, |ui| {
                    ui.label(
                        RichText::new(format!("{} {e}", UI_TEXT.chart_load_failed))
                            .color(PLOT_CONFIG.color_warning),
                    );
                    if ui.button(&UI_TEXT.chart_retry).clicked() {
                        action = Some(ChartAction::Retry);
                    }
                });
                action
            }
            (ChartStatus::NoData, _) => {
                centered_message(ui, |ui| {
                    ui.label(
                        RichText::new(format!("{} {asset}", UI_TEXT.chart_no_data))
                            .color(PLOT_CONFIG.chart_text),
                    );
                });
                None
            }
            (ChartStatus::Ready | ChartStatus::Loaded, Some(surface)) => {
                draw_series(ui, asset, surface);
                None
            }
        }
    }
}

/// False while the container is still collapsed, e.g. before the first layout.
pub fn container_has_area(size: Vec2) -> bool {
    let usable = |v: f32| v.is_finite() && v >= PLOT_CONFIG.min_chart_side;
    usable(size.x) && usable(size.y)
}

fn centered_message(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(ui.available_height() * 0.4);
        add_contents(ui);
    });
}

fn draw_series(ui: &mut Ui, asset: &str, surface: &ChartSurface) {
    let points = surface.series.points();
    let times: Vec<Option<i64>> = points.iter().map(|p| p.time.epoch_secs()).collect();

    let time_axis = AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(move |mark, _range| {
            let idx = mark.value.round();
            if idx < 0.0 || (idx - mark.value).abs() > f64::EPSILON {
                return String::new();
            }
            times
                .get(idx as usize)
                .copied()
                .flatten()
                .map(epoch_sec_to_date_string)
                .unwrap_or_default()
        });
    let price_axis = AxisHints::new_y()
        .label(format!("{}  {}", asset, UI_TEXT.plot_y_axis))
        .formatter(|mark, _range| format!("{:.2}", mark.value))
        .placement(HPlacement::Right);

    Frame::NONE
        .stroke(Stroke::new(1.0, PLOT_CONFIG.chart_border))
        .show(ui, |ui| {
            // Axis labels and grid lines follow the text colour.
            ui.visuals_mut().override_text_color = Some(PLOT_CONFIG.chart_text);
            Plot::new("price_chart")
                .width((surface.size.x - 2.0).max(0.0))
                .height((surface.size.y - 2.0).max(0.0))
                .custom_x_axes(vec![time_axis])
                .custom_y_axes(vec![price_axis])
                .label_formatter(|_, _| String::new())
                .allow_double_click_reset(true)
                .allow_scroll(false)
                .allow_drag(Vec2b { x: true, y: false })
                .allow_zoom(Vec2b { x: true, y: false })
                .show(ui, |plot_ui| {
                    if let Some((lo, hi)) = crate::ui::plot_layers::price_bounds(points) {
                        plot_ui.set_plot_bounds_y(lo..=hi);
                    }
                    let ctx = LayerContext { points };
                    let layers: Vec<Box<dyn PlotLayer>> = vec![Box::new(CandlestickLayer)];
                    for layer in &layers {
                        layer.render(plot_ui, &ctx);
                    }
                });
        });
}
