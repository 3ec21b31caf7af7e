use std::collections::VecDeque;
use std::io::{self, Write};
use std::str::FromStr;

use crossbeam::channel::{Receiver, Sender, TryRecvError};
use egui::{ComboBox, ScrollArea, TextEdit, Ui, Window};
use tracing::{debug, info, Level};

use super::AppWindow;
use crate::widgets::line_filter_highlight_layout;

const WINDOW_NAME: &str = "logs";
const MAX_RECORDS: usize = 500;
const LEVELS: [Level; 5] = [
    Level::ERROR,
    Level::WARN,
    Level::INFO,
    Level::DEBUG,
    Level::TRACE,
];

/// `io::Write` end of the channel feeding the logs window. Each formatted
/// tracing event arrives as one write.
pub struct BuffWriter {
    publisher: Sender<Vec<u8>>,
}

impl BuffWriter {
    pub fn new(publisher: Sender<Vec<u8>>) -> Self {
        Self { publisher }
    }
}

impl Write for BuffWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.publisher
            .send(buf.to_vec())
            .map_err(|err| io::Error::new(io::ErrorKind::BrokenPipe, err))?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    level: Level,
    line: String,
}

impl Record {
    /// Level is the first whitespace separated token naming one, as the
    /// fmt layer prints it right after the timestamp.
    fn parse(raw: &[u8]) -> Self {
        let line = String::from_utf8_lossy(raw).trim_end().to_string();
        let level = line
            .split_whitespace()
            .filter(|token| token.chars().all(|c| c.is_ascii_alphabetic()))
            .find_map(|token| Level::from_str(token).ok())
            .unwrap_or(Level::INFO);

        Self { level, line }
    }

    fn matches(&self, max_level: Level, needle: &str) -> bool {
        self.level <= max_level
            && (needle.is_empty() || self.line.to_lowercase().contains(needle))
    }
}

pub struct Logs {
    records: VecDeque<Record>,
    max_level: Level,
    filter: String,
    receiver: Receiver<Vec<u8>>,
    visible: bool,
}

impl Logs {
    pub fn new(receiver: Receiver<Vec<u8>>, visible: bool) -> Self {
        info!("initing window logs");

        Self {
            records: VecDeque::with_capacity(MAX_RECORDS),
            max_level: Level::TRACE,
            filter: String::new(),
            receiver,
            visible,
        }
    }

    fn drain(&mut self) {
        loop {
            match self.receiver.try_recv() {
                Ok(raw) => self.push(Record::parse(&raw)),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn push(&mut self, record: Record) {
        if self.records.len() == MAX_RECORDS {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    fn visible_text(&self) -> (String, usize) {
        let needle = self.filter.to_lowercase();
        let shown: Vec<&str> = self
            .records
            .iter()
            .filter(|r| r.matches(self.max_level, &needle))
            .map(|r| r.line.as_str())
            .collect();

        (shown.join("\n"), shown.len())
    }

    fn update(&mut self, visible: bool, filter: String, max_level: Level, clear: bool) {
        self.drain();

        if clear {
            debug!("clearing {} log records", self.records.len());
            self.records.clear();
        }

        self.filter = filter;
        self.max_level = max_level;

        if visible != self.visible {
            self.visible = visible;
            match visible {
                true => info!("opening logs window..."),
                false => info!("closing logs window..."),
            }
        }
    }
}

impl AppWindow for Logs {
    fn toggle_btn(&mut self, ui: &mut Ui) {
        if ui.button(WINDOW_NAME).clicked() {
            self.update(!self.visible, self.filter.clone(), self.max_level, false)
        }
    }

    fn show(&mut self, ui: &mut Ui) {
        let mut visible = self.visible;
        let mut filter = self.filter.clone();
        let mut max_level = self.max_level;
        let mut clear = false;
        let (text, shown) = self.visible_text();

        Window::new(WINDOW_NAME)
            .open(&mut visible)
            .show(ui.ctx(), |ui| {
                ui.horizontal(|ui| {
                    TextEdit::singleline(&mut filter)
                        .hint_text("filter")
                        .show(ui);
                    ComboBox::from_id_source("log_level")
                        .selected_text(max_level.as_str())
                        .show_ui(ui, |ui| {
                            LEVELS.into_iter().for_each(|l| {
                                ui.selectable_value(&mut max_level, l, l.as_str());
                            });
                        });
                    ui.label(format!("{shown}/{}", self.records.len()));
                    if ui.button("clear").clicked() {
                        clear = true;
                    }
                });

                ui.add_space(10.0);

                ScrollArea::both()
                    .stick_to_bottom(true)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        let mut layouter = |ui: &Ui, string: &str, _: f32| {
                            ui.fonts()
                                .layout_job(line_filter_highlight_layout(string, &filter))
                        };

                        TextEdit::multiline(&mut text.as_str())
                            .layouter(&mut layouter)
                            .show(ui);
                    });
            });

        self.update(visible, filter, max_level, clear);
    }
}

#[cfg(test)]
mod test {
    use crossbeam::channel::unbounded;

    use super::*;

    const TOGGLE: &str =
        "2026-10-17T09:30:00.123Z DEBUG led_matrix::matrix::store: toggling cell (2, 3)\n";
    const EXPORT: &str =
        "2026-10-17T09:30:01.000Z  INFO led_matrix::matrix::export: exported matrix to file\n";
    const FAILED: &str =
        "2026-10-17T09:30:02.000Z ERROR led_matrix::matrix::export: failed to export matrix\n";

    fn logs_with(lines: &[&str]) -> Logs {
        let (s, r) = unbounded();
        let mut writer = BuffWriter::new(s);
        lines
            .iter()
            .for_each(|l| writer.write_all(l.as_bytes()).unwrap());

        let mut logs = Logs::new(r, false);
        logs.drain();
        logs
    }

    #[test]
    fn parses_level_from_fmt_line() {
        assert_eq!(Record::parse(TOGGLE.as_bytes()).level, Level::DEBUG);
        assert_eq!(Record::parse(EXPORT.as_bytes()).level, Level::INFO);
        assert_eq!(Record::parse(FAILED.as_bytes()).level, Level::ERROR);
        assert_eq!(Record::parse(b"no level here").level, Level::INFO);
        assert!(!Record::parse(TOGGLE.as_bytes()).line.ends_with('\n'));
    }

    #[test]
    fn level_and_text_filters() {
        let mut logs = logs_with(&[TOGGLE, EXPORT, FAILED]);
        assert_eq!(logs.visible_text().1, 3);

        logs.update(false, "".to_string(), Level::INFO, false);
        assert_eq!(logs.visible_text().1, 2);

        logs.update(false, "CELL (2".to_string(), Level::TRACE, false);
        let (text, shown) = logs.visible_text();
        assert_eq!(shown, 1);
        assert!(text.ends_with("toggling cell (2, 3)"));

        logs.update(false, "export".to_string(), Level::ERROR, false);
        let (text, shown) = logs.visible_text();
        assert_eq!(shown, 1);
        assert!(text.contains("failed to export matrix"));
    }

    #[test]
    fn records_are_capped() {
        let mut logs = logs_with(&[]);
        (0..MAX_RECORDS + 2)
            .for_each(|i| logs.push(Record::parse(format!("line {i}").as_bytes())));

        assert_eq!(logs.records.len(), MAX_RECORDS);
        assert_eq!(logs.records.front().unwrap().line, "line 2");
    }

    #[test]
    fn clear_drops_records() {
        let mut logs = logs_with(&[TOGGLE, EXPORT]);
        logs.update(false, "".to_string(), Level::TRACE, true);

        assert!(logs.records.is_empty());
    }
}
