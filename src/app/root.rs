use {
    anyhow::Context as _,
    eframe::{
        Frame,
        egui::{
            Align, CentralPanel, Context, Layout, RichText, SidePanel, TopBottomPanel, Visuals,
        },
    },
    std::time::Duration,
};

use crate::{
    Cli,
    app::{OperationController, Panel, PanelControl},
    config::{DASHBOARD, PLOT_CONFIG},
    data::{AsyncBackend, BackendClient, HttpBackend},
    trace_time,
    ui::{
        ChartAction, ChartHost, ChartView, PanelAction, PanelSwitcher, ParameterForm,
        ResultPresenter, UI_CONFIG, UI_TEXT, UiStyleExt, render_config_panel, render_panel_tabs,
        render_status_panel,
        container_has_area,
    },
};

#[cfg(not(target_arch = "wasm32"))]
use tokio::runtime::Runtime;

pub struct App {
    chart: ChartView,
    form: ParameterForm,
    presenter: ResultPresenter,
    panels: PanelSwitcher,
    controller: OperationController,
    backend: Box<dyn BackendClient>,
    host: ChartHost,
    chart_started: bool,
    balance_text: String,
    #[cfg(not(target_arch = "wasm32"))]
    _runtime: Runtime,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<Self> {
        let api = HttpBackend::new(&args.backend_url)
            .with_context(|| format!("creating HTTP client for {}", args.backend_url))?;
        log::info!("Backend at {}", api.base_url());

        #[cfg(not(target_arch = "wasm32"))]
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("backend-io")
            .enable_all()
            .build()
            .context("starting async runtime")?;

        #[cfg(not(target_arch = "wasm32"))]
        let backend = AsyncBackend::new(api, runtime.handle().clone());
        #[cfg(target_arch = "wasm32")]
        let backend = AsyncBackend::new(api);

        let host = ChartHost {
            renderer_available: cc.gl.is_some(),
        };
        if !host.renderer_available {
            log::warn!("No OpenGL context, the chart will be unavailable");
        }

        Ok(Self {
            chart: ChartView::default(),
            form: ParameterForm::with_asset(args.asset),
            presenter: ResultPresenter::default(),
            panels: PanelSwitcher::default(),
            controller: OperationController::new(),
            backend: Box::new(backend),
            host,
            chart_started: false,
            balance_text: fetch_initial_balance(),
            #[cfg(not(target_arch = "wasm32"))]
            _runtime: runtime,
        })
    }

    fn handle_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::Start => {
                self.controller.start(
                    &self.form,
                    self.backend.as_ref(),
                    &mut self.presenter,
                    &mut self.panels,
                );
            }
            PanelAction::Stop => self.controller.stop(&mut self.presenter),
            PanelAction::AssetChanged(asset) => self.chart.load(self.backend.as_ref(), &asset),
            PanelAction::SwitchTo(Panel::Config) => self.panels.show_config(),
            PanelAction::SwitchTo(Panel::Status) => self.panels.show_status(),
        }
    }

    fn render_top_panel(&self, ctx: &Context) {
        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(&UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
                    ui.separator();
                    ui.label_subheader(self.form.effective_asset());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.metric(
                            &UI_TEXT.label_balance,
                            &self.balance_text,
                            PLOT_CONFIG.color_text_primary,
                        );
                    });
                });
            });
    }

    fn render_side_panel(&mut self, ctx: &Context) -> Option<PanelAction> {
        let visible = self.panels.visible();
        let start = self.controller.ui_state().start;
        SidePanel::left("control_panel")
            .exact_width(UI_CONFIG.side_panel_width)
            .resizable(false)
            .frame(UI_CONFIG.side_panel_frame())
            .show(ctx, |ui| {
                let tab = render_panel_tabs(ui, visible);
                let action = match visible {
                    Panel::Config => render_config_panel(ui, &mut self.form, start),
                    Panel::Status => render_status_panel(ui),
                };
                action.or(tab)
            })
            .inner
    }

    fn render_central_panel(&mut self, ctx: &Context) -> Option<ChartAction> {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                let size = ui.available_size();
                // A collapsed panel (minimized window, canvas not laid out yet)
                // postpones creation instead of failing it.
                let can_start = !self.host.renderer_available || container_has_area(size);
                if !self.chart_started && can_start {
                    self.chart_started = true;
                    if self.chart.initialize(self.host, Some(size)).is_ok() {
                        self.chart
                            .load(self.backend.as_ref(), self.form.effective_asset());
                    }
                } else if self.chart_started {
                    self.chart.observe_container(size);
                }
                self.chart.show(ui)
            })
            .inner
    }
}

/// Placeholder until the backend exposes a balance endpoint.
fn fetch_initial_balance() -> String {
    log::debug!("Using placeholder balance");
    DASHBOARD.placeholder_balance.to_string()
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        trace_time!("Poll backend", 500, {
            self.chart.poll();
            self.controller.poll(&mut self.presenter, &mut self.panels);
        });

        self.render_top_panel(ctx);
        if let Some(action) = self.render_side_panel(ctx) {
            self.handle_panel_action(action);
        }
        if let Some(ChartAction::Retry) = self.render_central_panel(ctx) {
            let asset = self
                .chart
                .asset()
                .unwrap_or_else(|| self.form.effective_asset())
                .to_string();
            self.chart.load(self.backend.as_ref(), &asset);
        }
        self.presenter.render(ctx);

        if self.chart.is_loading() || self.controller.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.side_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.extreme_bg_color = PLOT_CONFIG.chart_background;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
