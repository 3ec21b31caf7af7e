use std::time::Duration;

use chrono::Utc;
use crossbeam::channel::Receiver;
use egui::{ScrollArea, TextEdit, Ui, Window};
use tracing::{debug, info};

use super::AppWindow;
use crate::matrix::{pattern_name, Pattern};

const WINDOW_NAME: &str = "pattern";

/// Live monochrome bitmap of the editor grid in the format the hardware
/// scripts load.
pub struct PatternPreview {
    pattern: Pattern,
    text: String,
    receiver: Receiver<Pattern>,
    visible: bool,
}

impl PatternPreview {
    pub fn new(receiver: Receiver<Pattern>, visible: bool) -> Self {
        info!("initing window pattern");

        let pattern = Pattern::default();
        Self {
            text: pattern.render(&pattern_name(Utc::now())),
            pattern,
            receiver,
            visible,
        }
    }

    fn update(&mut self, visible: bool) {
        self.handle_events();

        if visible != self.visible {
            self.visible = visible;
            match visible {
                true => info!("opening pattern window..."),
                false => info!("closing pattern window..."),
            }
        }
    }

    fn handle_events(&mut self) {
        let mut latest = None;
        while let Ok(pattern) = self.receiver.recv_timeout(Duration::from_nanos(1)) {
            latest = Some(pattern);
        }

        if let Some(pattern) = latest {
            if pattern != self.pattern {
                debug!("got new pattern: {:?}", pattern.bytes());
                self.pattern = pattern;
                self.text = pattern.render(&pattern_name(Utc::now()));
            }
        }
    }
}

impl AppWindow for PatternPreview {
    fn toggle_btn(&mut self, ui: &mut Ui) {
        if ui.button(WINDOW_NAME).clicked() {
            self.update(!self.visible)
        }
    }

    fn show(&mut self, ui: &mut Ui) {
        let mut visible = self.visible;

        Window::new(WINDOW_NAME)
            .open(&mut visible)
            .show(ui.ctx(), |ui| {
                if ui.button("copy").clicked() {
                    debug!("pattern copied to clipboard");
                    ui.output().copied_text = self.text.clone();
                }

                ui.add_space(10.0);
                ScrollArea::vertical().show(ui, |ui| {
                    ui.add(TextEdit::multiline(&mut self.text.as_str()).code_editor());
                });
            });

        self.update(visible);
    }
}

#[cfg(test)]
mod test {
    use crossbeam::channel::unbounded;

    use super::*;
    use crate::matrix::Store;

    #[test]
    fn keeps_latest_pattern() {
        let (s, r) = unbounded();
        let mut preview = PatternPreview::new(r, false);

        let mut store = Store::new();
        s.send(Pattern::from_grid(&store.toggle_cell(0, 0).unwrap()))
            .unwrap();
        s.send(Pattern::from_grid(&store.toggle_cell(1, 0).unwrap()))
            .unwrap();

        preview.update(false);

        assert_eq!(preview.pattern.bytes()[0], 0b1000_0000);
        assert_eq!(preview.pattern.bytes()[1], 0b1000_0000);
        assert!(preview.text.contains("        0b10000000,\n        0b10000000,\n"));
    }
}
