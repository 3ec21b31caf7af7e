use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, error, info};

use super::{errors, Grid, GRID_SIZE};

const FILE_PREFIX: &str = "led-matrix-";
const FILE_EXTENSION: &str = "json";

/// Snapshot written to disk. Field order is the on-disk key order.
#[derive(Debug, Serialize)]
pub struct Document<'a> {
    pub matrix: &'a Grid,
    pub timestamp: String,
    pub size: usize,
}

impl<'a> Document<'a> {
    pub fn new(matrix: &'a Grid, at: DateTime<Utc>) -> Self {
        Self {
            matrix,
            timestamp: iso_timestamp(at),
            size: GRID_SIZE,
        }
    }

    pub fn to_json(&self) -> Result<String, errors::Export> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Colons are swapped for dashes, the document keeps the raw timestamp.
    pub fn file_name(&self) -> String {
        format!(
            "{FILE_PREFIX}{}.{FILE_EXTENSION}",
            self.timestamp.replace(':', "-")
        )
    }
}

/// `2026-10-16T09:30:00.123Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Destination that makes serialized bytes available as a named file.
pub trait Sink {
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, errors::Export>;
}

/// Writes straight into a directory, creating it when missing.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Sink for DirSink {
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, errors::Export> {
        if !self.dir.exists() {
            info!("creating export directory: {}", self.dir.display());
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.dir.join(file_name);
        debug!("writing {} bytes to {}", bytes.len(), path.display());

        let mut f = File::create(&path)?;
        f.write_all(bytes)?;
        f.flush()?;

        Ok(path)
    }
}

/// Asks the user where to save via the native dialog.
#[derive(Debug, Clone)]
pub struct DialogSink {
    start_dir: PathBuf,
}

impl DialogSink {
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
        }
    }
}

impl Sink for DialogSink {
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, errors::Export> {
        debug!("opening save dialog");

        let picked = rfd::FileDialog::new()
            .set_directory(&self.start_dir)
            .set_file_name(file_name)
            .add_filter("JSON files", &[FILE_EXTENSION])
            .save_file();

        let path = match picked {
            Some(path) => path,
            None => return Err(errors::Export::Cancelled),
        };

        let mut f = File::create(&path)?;
        f.write_all(bytes)?;
        f.flush()?;

        Ok(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    pub path: PathBuf,
    pub timestamp: String,
}

pub fn export_grid(grid: &Grid, sink: &mut dyn Sink) -> Result<Exported, errors::Export> {
    export_grid_at(grid, Utc::now(), sink)
}

pub fn export_grid_at(
    grid: &Grid,
    at: DateTime<Utc>,
    sink: &mut dyn Sink,
) -> Result<Exported, errors::Export> {
    let doc = Document::new(grid, at);
    let json = doc.to_json()?;
    let file_name = doc.file_name();

    match sink.deliver(&file_name, json.as_bytes()) {
        Ok(path) => {
            info!("exported matrix to file: {}", path.display());
            Ok(Exported {
                path,
                timestamp: doc.timestamp,
            })
        }
        Err(err) => {
            error!("failed to export matrix: {err}");
            Err(err)
        }
    }
}
