use {
    crate::{
        config::PLOT_CONFIG,
        ui::{DialogTone, UI_CONFIG},
    },
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait ToneColor {
    fn color(&self) -> Color32;
}

impl ToneColor for DialogTone {
    fn color(&self) -> Color32 {
        match self {
            Self::Success => PLOT_CONFIG.color_profit,
            Self::Error => PLOT_CONFIG.color_loss,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn button_text_primary(&self, text: impl Into<String>) -> RichText;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(label);
            ui.label(RichText::new(value).color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn button_text_primary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(Color32::GREEN)
    }
}
