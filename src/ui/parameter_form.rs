use eframe::egui::{ComboBox, Grid, TextEdit, Ui};

use crate::app::ParameterSource;
use crate::config::DASHBOARD;
use crate::domain::{RawParameters, TradeParameters, ValidationError};
use crate::ui::UI_TEXT;

/// Something the user changed that other components care about.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    AssetChanged(String),
}

/// Editable trade parameters, kept as the raw text the user typed.
#[derive(Debug, Clone)]
pub struct ParameterForm {
    /// `None` when the asset selector is not offered at all.
    pub asset: Option<String>,
    pub ai_model: String,
    pub strategy: String,
    pub entry_value: String,
    pub target_value: String,
    pub stop_loss: String,
}

impl Default for ParameterForm {
    fn default() -> Self {
        Self {
            asset: Some(DASHBOARD.fallback_asset.to_string()),
            ai_model: DASHBOARD.ai_models.first().copied().unwrap_or_default().to_string(),
            strategy: DASHBOARD.strategies.first().copied().unwrap_or_default().to_string(),
            entry_value: DASHBOARD.form.entry_value.to_string(),
            target_value: DASHBOARD.form.target_value.to_string(),
            stop_loss: DASHBOARD.form.stop_loss.to_string(),
        }
    }
}

impl ParameterForm {
    pub fn with_asset(asset: impl Into<String>) -> Self {
        Self {
            asset: Some(asset.into()),
            ..Self::default()
        }
    }

    /// The symbol a request would use right now.
    pub fn effective_asset(&self) -> &str {
        self.asset
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DASHBOARD.fallback_asset)
    }

    fn raw(&self) -> RawParameters<'_> {
        RawParameters {
            asset: self.asset.as_deref(),
            ai_model: &self.ai_model,
            strategy: &self.strategy,
            entry_value: &self.entry_value,
            target_value: &self.target_value,
            stop_loss: &self.stop_loss,
        }
    }

    pub fn render(&mut self, ui: &mut Ui, editable: bool) -> Option<FormEvent> {
        let mut event = None;
        ui.add_enabled_ui(editable, |ui| {
            Grid::new("parameter_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    if let Some(asset) = &mut self.asset {
                        ui.label(&UI_TEXT.label_asset);
                        let before = asset.clone();
                        ComboBox::from_id_salt("asset_selector")
                            .selected_text(asset.as_str())
                            .show_ui(ui, |ui| {
                                for choice in DASHBOARD.assets {
                                    ui.selectable_value(&mut *asset, choice.to_string(), *choice);
                                }
                            });
                        if *asset != before {
                            event = Some(FormEvent::AssetChanged(asset.clone()));
                        }
                        ui.end_row();
                    }

                    ui.label(&UI_TEXT.label_ai_model);
                    choice_box(ui, "ai_model", &mut self.ai_model, DASHBOARD.ai_models);
                    ui.end_row();

                    ui.label(&UI_TEXT.label_strategy);
                    choice_box(ui, "strategy", &mut self.strategy, DASHBOARD.strategies);
                    ui.end_row();

                    ui.label(&UI_TEXT.label_entry_value);
                    ui.add(TextEdit::singleline(&mut self.entry_value).desired_width(120.0));
                    ui.end_row();

                    ui.label(&UI_TEXT.label_target_value);
                    ui.add(TextEdit::singleline(&mut self.target_value).desired_width(120.0));
                    ui.end_row();

                    ui.label(&UI_TEXT.label_stop_loss);
                    ui.add(TextEdit::singleline(&mut self.stop_loss).desired_width(120.0));
                    ui.end_row();
                });
        });
        event
    }
}

fn choice_box(ui: &mut Ui, id_salt: &str, value: &mut String, choices: &[&str]) {
    ComboBox::from_id_salt(id_salt)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for choice in choices {
                ui.selectable_value(&mut *value, choice.to_string(), *choice);
            }
        });
}

impl ParameterSource for ParameterForm {
    fn read_and_validate(&self) -> Result<TradeParameters, ValidationError> {
        TradeParameters::validate(&self.raw(), DASHBOARD.fallback_asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormField;

    #[test]
    fn default_form_is_valid() {
        let params = ParameterForm::default().read_and_validate().unwrap();
        assert_eq!(params.asset, DASHBOARD.fallback_asset);
        assert_eq!(params.entry_value, 100.0);
        assert_eq!(params.target_value, 150.0);
        assert_eq!(params.stop_loss, 10.0);
    }

    #[test]
    fn reads_current_field_text() {
        let mut form = ParameterForm::with_asset("ETH/USD");
        form.entry_value = "abc".into();
        let err = form.read_and_validate().unwrap_err();
        assert_eq!(err.field(), Some(FormField::EntryValue));

        form.entry_value = "2000".into();
        form.target_value = "2500.5".into();
        let params = form.read_and_validate().unwrap();
        assert_eq!(params.asset, "ETH/USD");
        assert_eq!(params.target_value, 2500.5);
    }

    #[test]
    fn absent_selector_uses_fallback_symbol() {
        let form = ParameterForm {
            asset: None,
            ..ParameterForm::default()
        };
        assert_eq!(form.effective_asset(), DASHBOARD.fallback_asset);
        assert_eq!(
            form.read_and_validate().unwrap().asset,
            DASHBOARD.fallback_asset
        );
    }
}
