use crate::app::{OperationPhase, PanelControl, ParameterSource, ResultSink, UiState};
use crate::config::DF;
use crate::data::{BackendClient, BacktestPromise};
use crate::domain::{BacktestSuccess, OperationError, OperationResult};
use crate::ui::UI_TEXT;

/// What a press of the start control led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A submission was already running. Nothing happened.
    Rejected,
    /// The form did not validate. The error is on screen, no request went out.
    Invalid,
    Submitted,
}

/// Drives one backtest at a time from the start control to the result dialog.
#[derive(Default)]
pub struct OperationController {
    ui: UiState,
    in_flight: Option<BacktestPromise>,
}

impl OperationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui
    }

    pub fn is_submitting(&self) -> bool {
        self.ui.phase == OperationPhase::Submitting
    }

    pub fn start(
        &mut self,
        form: &dyn ParameterSource,
        backend: &dyn BackendClient,
        sink: &mut dyn ResultSink,
        panels: &mut dyn PanelControl,
    ) -> StartOutcome {
        if self.is_submitting() {
            if DF.log_transitions {
                log::info!("Start ignored, a backtest is already being submitted");
            }
            return StartOutcome::Rejected;
        }
        self.ui.transition(OperationPhase::Submitting);

        let params = match form.read_and_validate() {
            Ok(params) => params,
            Err(e) => {
                self.finish(Err(e.into()), sink, panels);
                return StartOutcome::Invalid;
            }
        };

        if DF.log_requests {
            log::info!(
                "Starting backtest: {} / {} / {} (entry {}, target {}, stop {})",
                params.asset,
                params.ai_model,
                params.strategy,
                params.entry_value,
                params.target_value,
                params.stop_loss
            );
        }
        self.in_flight = Some(backend.start_backtest(&params));
        StartOutcome::Submitted
    }

    /// Resolves a finished submission. Returns true once it has been presented.
    pub fn poll(&mut self, sink: &mut dyn ResultSink, panels: &mut dyn PanelControl) -> bool {
        let Some(promise) = self.in_flight.take() else {
            return false;
        };
        let reply = match promise.try_take() {
            Ok(reply) => reply,
            Err(pending) => {
                self.in_flight = Some(pending);
                return false;
            }
        };

        let outcome = reply
            .map_err(OperationError::from)
            .and_then(|response| match OperationResult::from(response) {
                OperationResult::Success(success) => Ok(success),
                OperationResult::Failure { error_message } => {
                    Err(OperationError::BackendLogical(error_message))
                }
            });
        self.finish(outcome, sink, panels);
        true
    }

    fn finish(
        &mut self,
        outcome: Result<BacktestSuccess, OperationError>,
        sink: &mut dyn ResultSink,
        panels: &mut dyn PanelControl,
    ) {
        match outcome {
            Ok(success) => {
                if let Some(path) = &success.plot_path {
                    log::info!("Backtest plot available at {path}");
                }
                sink.show(&success.summary(), false);
            }
            Err(e) => {
                match &e {
                    OperationError::Validation(_) => log::warn!("{e}"),
                    _ => log::error!("{e}"),
                }
                sink.show(&e.to_string(), true);
            }
        }
        self.ui.transition(OperationPhase::Idle);
        panels.show_config();
    }

    /// Only tells the user stopping is unavailable. An in-flight request keeps going.
    pub fn stop(&self, sink: &mut dyn ResultSink) {
        log::warn!("Stop requested, not implemented");
        sink.show(UI_TEXT.stop_not_implemented, true);
    }
}
