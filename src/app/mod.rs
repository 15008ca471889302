mod components;
mod controller;
mod root;
mod state;

pub use components::{PanelControl, ParameterSource, ResultSink};
pub use controller::{OperationController, StartOutcome};
pub use state::{OperationPhase, Panel, StartControl, UiState};

pub use root::App;
