use std::time::SystemTime;

use crossbeam::channel::{unbounded, Receiver, Sender};
use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::{CentralPanel, Context, TopBottomPanel, Vec2};
use tracing::{info, trace};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use matrix::Settings;
use widgets::Theme;
use windows::{AppWindow, BuffWriter, Editor, Logs, PatternPreview};

mod matrix;
mod widgets;
mod windows;

struct LedMatrixApp {
    windows: Vec<Box<dyn AppWindow>>,
    theme: Theme,
}

impl LedMatrixApp {
    fn new(_ctx: &CreationContext<'_>, settings: Settings, logs: Receiver<Vec<u8>>) -> Self {
        info!("Creating app...");
        info!("export directory: {}", settings.export_dir.display());

        let (s, r) = unbounded();

        Self {
            theme: Theme::new(settings.dark_mode),
            windows: vec![
                Box::new(Editor::new(settings, s, true)),
                Box::new(PatternPreview::new(r, false)),
                Box::new(Logs::new(logs, false)),
            ],
        }
    }
}

impl App for LedMatrixApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let start = SystemTime::now();

        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(&mut self.theme);

                self.windows.iter_mut().for_each(|w| {
                    w.as_mut().toggle_btn(ui);
                });
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            self.windows.iter_mut().for_each(|w| w.show(ui));
        });

        if let Ok(elapsed) = SystemTime::now().duration_since(start) {
            trace!("time elapsed per frame: {elapsed:?}");
        }
    }
}

fn init_tracing(logs: Sender<Vec<u8>>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(move || BuffWriter::new(logs.clone())),
        )
        .init();
}

fn main() {
    let (s, r) = unbounded();
    init_tracing(s);

    let settings = Settings::from_env();

    run_native(
        "LED Matrix Art Maker",
        NativeOptions {
            initial_window_size: Some(Vec2::new(640.0, 720.0)),
            ..Default::default()
        },
        Box::new(move |cc| Box::new(LedMatrixApp::new(cc, settings, r))),
    );
}
