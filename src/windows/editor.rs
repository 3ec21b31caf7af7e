use crossbeam::channel::Sender;
use egui::{Ui, Window};
use egui_notify::{Anchor, Toasts};
use tracing::{debug, error, info};

use super::AppWindow;
use crate::matrix::export::{export_grid, DialogSink, DirSink, Exported, Sink};
use crate::matrix::{errors, Pattern, Settings, Store};
use crate::widgets::{AppWidget, MatrixView, Palette};

const WINDOW_NAME: &str = "editor";
const EXPORT_SUCCESS: &str = "Matrix exported successfully";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Success(String),
    Error(String),
}

pub struct Editor {
    store: Store,
    view: MatrixView,
    palette: Palette,
    settings: Settings,
    last_export: Option<Exported>,
    patterns: Sender<Pattern>,
    toasts: Toasts,
    visible: bool,
}

impl Editor {
    pub fn new(settings: Settings, patterns: Sender<Pattern>, visible: bool) -> Self {
        info!("initing window editor");

        let store = Store::new();
        let editor = Self {
            view: MatrixView::new(store.grid()),
            palette: Palette::new(store.selected_color()),
            store,
            settings,
            last_export: None,
            patterns,
            toasts: Toasts::default().with_anchor(Anchor::TopRight),
            visible,
        };
        editor.publish_pattern();

        editor
    }

    fn update(&mut self, visible: bool, clicks: FrameClicks) {
        self.update_visible(visible);

        if let Some(color) = self.palette.picked() {
            self.store.set_selected_color(color);
        }

        if let Some((row, col)) = self.view.clicked() {
            self.toggle(row, col);
        }

        self.handle_clicks(clicks);
    }

    fn update_visible(&mut self, visible: bool) {
        if visible != self.visible {
            self.visible = visible;
            match visible {
                true => info!("opening editor window..."),
                false => info!("closing editor window..."),
            }
        }
    }

    fn handle_clicks(&mut self, clicks: FrameClicks) {
        if clicks.reset {
            let grid = self.store.reset_all();
            self.view.update_grid(grid);
            self.publish_pattern();
        }

        if clicks.export {
            let mut sink = DirSink::new(self.settings.export_dir.clone());
            if let Some(notice) = self.export(&mut sink) {
                self.notify(notice);
            }
        }

        if clicks.export_as {
            let mut sink = DialogSink::new(self.settings.export_dir.clone());
            if let Some(notice) = self.export(&mut sink) {
                self.notify(notice);
            }
        }

        if clicks.open_dir {
            self.open_export_dir();
        }
    }

    fn toggle(&mut self, row: usize, col: usize) {
        match self.store.toggle_cell(row, col) {
            Ok(grid) => {
                self.view.update_grid(grid);
                self.publish_pattern();
            }
            Err(err) => error!("failed to toggle cell: {err}"),
        }
    }

    /// Returns the notice to show; a cancelled dialog shows nothing.
    fn export(&mut self, sink: &mut dyn Sink) -> Option<Notice> {
        let grid = self.store.grid();

        match export_grid(&grid, sink) {
            Ok(exported) => {
                self.last_export = Some(exported);
                Some(Notice::Success(EXPORT_SUCCESS.to_string()))
            }
            Err(errors::Export::Cancelled) => {
                debug!("export cancelled by user");
                None
            }
            Err(err) => Some(Notice::Error(format!("Export failed: {err}"))),
        }
    }

    fn notify(&mut self, notice: Notice) {
        let toast = match notice {
            Notice::Success(text) => self.toasts.success(text),
            Notice::Error(text) => self.toasts.error(text),
        };
        toast
            .set_duration(Some(self.settings.toast_duration))
            .set_closable(true);
    }

    fn open_export_dir(&mut self) {
        let dir = self.settings.export_dir.clone();
        if !dir.exists() {
            self.toasts
                .info("Nothing exported yet")
                .set_duration(Some(self.settings.toast_duration));
            return;
        }

        if let Err(err) = open::that(&dir) {
            error!("failed to open export directory {}: {err}", dir.display());
            self.toasts
                .error("Failed to open export directory")
                .set_duration(Some(self.settings.toast_duration));
        }
    }

    fn publish_pattern(&self) {
        let pattern = Pattern::from_grid(&self.store.grid());
        if let Err(err) = self.patterns.send(pattern) {
            debug!("pattern preview is gone: {err}");
        }
    }
}

impl AppWindow for Editor {
    fn toggle_btn(&mut self, ui: &mut Ui) {
        if ui.button(WINDOW_NAME).clicked() {
            self.update_visible(!self.visible)
        }
    }

    fn show(&mut self, ui: &mut Ui) {
        let mut visible = self.visible;
        let mut clicks = FrameClicks::default();

        Window::new(WINDOW_NAME)
            .open(&mut visible)
            .resizable(false)
            .show(ui.ctx(), |ui| {
                self.view.show(ui);

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    self.palette.show(ui);
                    if ui.button("Export").clicked() {
                        clicks.export = true;
                    }
                    if ui.button("Export as…").clicked() {
                        clicks.export_as = true;
                    }
                    if ui.button("Reset").clicked() {
                        clicks.reset = true;
                    }
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.link(self.settings.export_dir.display().to_string()).clicked() {
                        clicks.open_dir = true;
                    }
                    if let Some(exported) = &self.last_export {
                        ui.label(format!("last export: {}", exported.timestamp))
                            .on_hover_text(exported.path.display().to_string());
                    }
                });
            });

        self.toasts.show(ui.ctx());

        self.update(visible, clicks);
    }
}

#[derive(Default)]
struct FrameClicks {
    export: bool,
    export_as: bool,
    reset: bool,
    open_dir: bool,
}
