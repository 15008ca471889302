use strum_macros::{Display, EnumIter};

use crate::config::DF;
use crate::ui::UI_TEXT;

/// The two top-level side panels. Exactly one is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Panel {
    #[default]
    Config,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum OperationPhase {
    #[default]
    Idle,
    Submitting,
}

/// How the start button should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartControl {
    pub enabled: bool,
    pub label: &'static str,
}

impl StartControl {
    fn for_phase(phase: OperationPhase) -> Self {
        match phase {
            OperationPhase::Idle => Self {
                enabled: true,
                label: UI_TEXT.start_idle.as_str(),
            },
            OperationPhase::Submitting => Self {
                enabled: false,
                label: UI_TEXT.start_processing,
            },
        }
    }
}

/// Controller-owned view state. Only `transition` changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub phase: OperationPhase,
    pub start: StartControl,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            phase: OperationPhase::Idle,
            start: StartControl::for_phase(OperationPhase::Idle),
        }
    }
}

impl UiState {
    pub(crate) fn transition(&mut self, next: OperationPhase) {
        if DF.log_transitions {
            log::info!("Operation {} -> {}", self.phase, next);
        }
        self.phase = next;
        self.start = StartControl::for_phase(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_follows_phase() {
        let mut state = UiState::default();
        assert!(state.start.enabled);
        assert_eq!(state.start.label, "▷ START");

        state.transition(OperationPhase::Submitting);
        assert_eq!(
            state.start,
            StartControl {
                enabled: false,
                label: "Processing...",
            }
        );

        state.transition(OperationPhase::Idle);
        assert_eq!(state, UiState::default());
    }
}
