use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

pub const EXPORT_DIR_ENV: &str = "LED_MATRIX_EXPORT_DIR";

#[derive(PartialEq, Clone, Debug)]
pub struct Settings {
    pub export_dir: PathBuf,
    pub toast_duration: Duration,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("web-drawings"),
            toast_duration: Duration::from_secs(3),
            dark_mode: true,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::default().with_export_dir(env::var(EXPORT_DIR_ENV).ok())
    }

    fn with_export_dir(mut self, dir: Option<String>) -> Self {
        if let Some(dir) = dir.filter(|d| !d.trim().is_empty()) {
            info!("export directory overridden by {EXPORT_DIR_ENV}: {dir}");
            self.export_dir = PathBuf::from(dir);
        }
        self
    }
}
