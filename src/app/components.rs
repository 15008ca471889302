//! The seams between the operation controller and the widgets it drives.

use crate::domain::{TradeParameters, ValidationError};

pub trait ParameterSource {
    /// Pure read of the current form state.
    fn read_and_validate(&self) -> Result<TradeParameters, ValidationError>;
}

pub trait ResultSink {
    fn show(&mut self, content: &str, is_error: bool);
}

pub trait PanelControl {
    fn show_config(&mut self);
    fn show_status(&mut self);
}
