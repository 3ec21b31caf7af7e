use egui::{Response, Visuals, Widget};
use tracing::debug;

const LIGHT_MODE_SYMBOL: &str = "🔆";
const DARK_MODE_SYMBOL: &str = "🌙";

/// Header button flipping between dark and light visuals.
pub struct Theme {
    dark_mode: bool,
}

impl Theme {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    fn visuals(&self) -> Visuals {
        match self.dark_mode {
            true => Visuals::dark(),
            false => Visuals::light(),
        }
    }
}

impl Widget for &mut Theme {
    fn ui(self, ui: &mut egui::Ui) -> Response {
        ui.ctx().set_visuals(self.visuals());

        let (symbol, hint) = match self.dark_mode {
            true => (LIGHT_MODE_SYMBOL, "switch to light mode"),
            false => (DARK_MODE_SYMBOL, "switch to dark mode"),
        };

        let btn = ui.button(symbol).on_hover_text(hint);
        if btn.clicked() {
            self.dark_mode = !self.dark_mode;
            debug!("dark mode: {}", self.dark_mode);
        }

        btn
    }
}
