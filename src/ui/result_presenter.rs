use eframe::egui::{Align, Context, Frame, Id, Key, Layout, Modal, Modifiers, RichText, Stroke};
use strum_macros::Display;

use crate::app::ResultSink;
use crate::ui::{ToneColor, UI_CONFIG, UI_TEXT};

/// Presentation class of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DialogTone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub header: String,
    pub tone: DialogTone,
    /// Content split on line breaks, one entry per rendered line.
    pub lines: Vec<String>,
}

/// The result modal. One dialog at most; only the user closes it.
#[derive(Debug, Default)]
pub struct ResultPresenter {
    dialog: Option<Dialog>,
    /// Set once the dialog has been on screen for a full frame. Keys pressed
    /// before that belong to whatever opened it.
    keys_armed: bool,
}

impl ResultPresenter {
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// The user's OK. Nothing else happens after the dialog goes away.
    pub fn acknowledge(&mut self) {
        self.dialog = None;
        self.keys_armed = false;
    }

    pub fn render(&mut self, ctx: &Context) {
        let Some(dialog) = &self.dialog else {
            return;
        };

        let mut acknowledged = false;
        let tone_color = dialog.tone.color();
        Modal::new(Id::new("result_dialog"))
            .frame(Frame::window(&ctx.style()).stroke(Stroke::new(2.0, tone_color)))
            .show(ctx, |ui| {
                ui.set_width(UI_CONFIG.dialog_width);
                ui.label(RichText::new(&dialog.header).strong().color(tone_color));
                ui.separator();
                for line in &dialog.lines {
                    ui.label(line);
                }
                ui.add_space(10.0);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(&UI_TEXT.dialog_ok).clicked() {
                        acknowledged = true;
                    }
                });
            });

        if self.keys_armed {
            acknowledged |= ctx.input_mut(|i| {
                i.consume_key(Modifiers::NONE, Key::Enter)
                    || i.consume_key(Modifiers::NONE, Key::Escape)
            });
        }
        self.keys_armed = true;

        if acknowledged {
            self.acknowledge();
        }
    }
}

impl ResultSink for ResultPresenter {
    fn show(&mut self, content: &str, is_error: bool) {
        let (header, tone) = if is_error {
            (&UI_TEXT.dialog_header_error, DialogTone::Error)
        } else {
            (&UI_TEXT.dialog_header_result, DialogTone::Success)
        };
        if self.dialog.is_some() {
            log::debug!("Result dialog already open, replacing its content");
        }
        self.dialog = Some(Dialog {
            header: header.clone(),
            tone,
            lines: content.split('\n').map(str::to_string).collect(),
        });
        self.keys_armed = false;
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Event, RawInput};

    use super::*;

    fn key_press(key: Key) -> RawInput {
        RawInput {
            events: vec![Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::NONE,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn line_breaks_become_separate_lines_and_markup_passes_through() {
        let mut presenter = ResultPresenter::default();
        presenter.show("Done\nReturn: <b>5%</b>\n\nPlot warning: x", false);
        let dialog = presenter.dialog().unwrap();
        assert_eq!(
            dialog.lines,
            vec!["Done", "Return: <b>5%</b>", "", "Plot warning: x"]
        );
        assert_eq!(dialog.tone, DialogTone::Success);
        assert_eq!(dialog.tone.to_string(), "success");
        assert_eq!(dialog.header, UI_TEXT.dialog_header_result);
    }

    #[test]
    fn second_show_overwrites_and_only_acknowledge_closes() {
        let mut presenter = ResultPresenter::default();
        presenter.show("first", false);
        presenter.show("second", true);
        let dialog = presenter.dialog().unwrap();
        assert_eq!(dialog.lines, vec!["second"]);
        assert_eq!(dialog.tone, DialogTone::Error);
        assert_eq!(dialog.header, UI_TEXT.dialog_header_error);

        assert!(presenter.is_open());
        presenter.acknowledge();
        assert!(!presenter.is_open());
    }

    #[test]
    fn key_press_that_opened_the_dialog_does_not_close_it() {
        let ctx = Context::default();
        let mut presenter = ResultPresenter::default();
        let _ = ctx.run(RawInput::default(), |ctx| presenter.render(ctx));

        // Enter activated Start: the error is shown and drawn in the same frame.
        let _ = ctx.run(key_press(Key::Enter), |ctx| {
            presenter.show("Validation error: Entry value is required.", true);
            presenter.render(ctx);
        });
        assert!(presenter.is_open());

        // Plain frames never close it.
        for _ in 0..3 {
            let _ = ctx.run(RawInput::default(), |ctx| presenter.render(ctx));
        }
        assert!(presenter.is_open());

        let _ = ctx.run(key_press(Key::Enter), |ctx| presenter.render(ctx));
        assert!(!presenter.is_open());
    }

    #[test]
    fn escape_acknowledges_once_the_dialog_is_on_screen() {
        let ctx = Context::default();
        let mut presenter = ResultPresenter::default();
        presenter.show("done", false);
        let _ = ctx.run(RawInput::default(), |ctx| presenter.render(ctx));
        assert!(presenter.is_open());

        // Overwriting re-arms the guard.
        let _ = ctx.run(key_press(Key::Escape), |ctx| {
            presenter.show("second", true);
            presenter.render(ctx);
        });
        assert_eq!(presenter.dialog().unwrap().lines, vec!["second"]);

        let _ = ctx.run(key_press(Key::Escape), |ctx| presenter.render(ctx));
        assert!(!presenter.is_open());
    }
}
