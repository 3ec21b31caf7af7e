use egui::{Color32, ComboBox, RichText};
use tracing::debug;

use super::AppWidget;
use crate::matrix::Color;

/// Color selector restricted to the fixed palette.
pub struct Palette {
    selected: Color,
    changed: bool,
}

impl Palette {
    pub fn new(selected: Color) -> Self {
        Self {
            selected,
            changed: false,
        }
    }

    /// Returns the newly picked color once, then `None` until it changes again.
    pub fn picked(&mut self) -> Option<Color> {
        if !self.changed {
            return None;
        }

        self.changed = false;
        Some(self.selected)
    }

    fn update(&mut self, selected: Color) {
        if selected != self.selected {
            debug!("palette selection: {}", selected.name());
            self.selected = selected;
            self.changed = true;
        }
    }
}

impl AppWidget for Palette {
    fn show(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.selected;

        ComboBox::from_id_source("palette")
            .width(200.0)
            .selected_text(swatch(selected))
            .show_ui(ui, |ui| {
                Color::ALL.into_iter().for_each(|c| {
                    ui.selectable_value(&mut selected, c, swatch(c));
                });
            });

        self.update(selected);
    }
}

fn swatch(c: Color) -> RichText {
    let (r, g, b) = c.rgb();
    RichText::new(format!("⏺ {}", c.name())).color(Color32::from_rgb(r, g, b))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn picked_reports_change_once() {
        let mut palette = Palette::new(Color::White);
        assert_eq!(palette.picked(), None);

        palette.update(Color::Red);
        assert_eq!(palette.picked(), Some(Color::Red));
        assert_eq!(palette.picked(), None);

        palette.update(Color::Red);
        assert_eq!(palette.picked(), None);
    }
}
