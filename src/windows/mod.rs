mod editor;
mod logs;
mod pattern;
mod window;

pub use self::editor::Editor;
pub use self::logs::{BuffWriter, Logs};
pub use self::pattern::PatternPreview;
pub use self::window::AppWindow;
