use crate::app::{Panel, PanelControl};

/// Owns which of the two top-level panels is on screen.
#[derive(Debug, Default)]
pub struct PanelSwitcher {
    visible: Panel,
}

impl PanelSwitcher {
    pub fn visible(&self) -> Panel {
        self.visible
    }
}

impl PanelControl for PanelSwitcher {
    fn show_config(&mut self) {
        self.visible = Panel::Config;
    }

    fn show_status(&mut self) {
        self.visible = Panel::Status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_config_and_toggles_idempotently() {
        let mut panels = PanelSwitcher::default();
        assert_eq!(panels.visible(), Panel::Config);

        panels.show_status();
        panels.show_status();
        assert_eq!(panels.visible(), Panel::Status);

        panels.show_config();
        panels.show_config();
        assert_eq!(panels.visible(), Panel::Config);
    }
}
