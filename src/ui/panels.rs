use eframe::egui::{Button, RichText, Ui};
use strum::IntoEnumIterator;

use crate::app::{Panel, StartControl};
use crate::config::PLOT_CONFIG;
use crate::ui::{FormEvent, ParameterForm, UI_TEXT, UiStyleExt, colored_subsection_heading};

/// Things the side panel asks the app to do this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    Start,
    Stop,
    AssetChanged(String),
    SwitchTo(Panel),
}

/// Tab row above whichever panel is visible.
pub fn render_panel_tabs(ui: &mut Ui, visible: Panel) -> Option<PanelAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        for panel in Panel::iter() {
            let label = match panel {
                Panel::Config => &UI_TEXT.config_heading,
                Panel::Status => &UI_TEXT.status_heading,
            };
            if ui.selectable_label(visible == panel, label.as_str()).clicked() && visible != panel {
                action = Some(PanelAction::SwitchTo(panel));
            }
        }
    });
    ui.separator();
    action
}

pub fn render_config_panel(
    ui: &mut Ui,
    form: &mut ParameterForm,
    start: StartControl,
) -> Option<PanelAction> {
    let mut action = None;

    ui.label(colored_subsection_heading(&UI_TEXT.config_heading));
    ui.add_space(6.0);

    if let Some(FormEvent::AssetChanged(asset)) = form.render(ui, start.enabled) {
        action = Some(PanelAction::AssetChanged(asset));
    }

    ui.add_space(6.0);
    ui.metric(&UI_TEXT.label_current_pnl, &UI_TEXT.pnl_placeholder, PLOT_CONFIG.color_text_neutral);
    ui.add_space(12.0);

    let label = ui.button_text_primary(start.label);
    let button = Button::new(label).min_size([ui.available_width(), 32.0].into());
    if ui.add_enabled(start.enabled, button).clicked() {
        action = Some(PanelAction::Start);
    }

    action
}

pub fn render_status_panel(ui: &mut Ui) -> Option<PanelAction> {
    ui.label_subheader(&UI_TEXT.status_heading);
    ui.add_space(6.0);
    ui.label_subdued(&UI_TEXT.status_placeholder);
    ui.metric(&UI_TEXT.label_live_pnl, &UI_TEXT.pnl_placeholder, PLOT_CONFIG.color_text_neutral);
    ui.add_space(12.0);

    let label = RichText::new(&UI_TEXT.stop).strong().color(PLOT_CONFIG.color_loss);
    let button = Button::new(label).min_size([ui.available_width(), 32.0].into());
    ui.add(button).clicked().then_some(PanelAction::Stop)
}
