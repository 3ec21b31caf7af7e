mod color;
pub mod errors;
pub mod export;
mod grid;
mod pattern;
mod settings;
mod store;

pub use self::color::Color;
pub use self::grid::{Cell, Grid, GRID_SIZE};
pub use self::pattern::{pattern_name, Pattern};
pub use self::settings::Settings;
pub use self::store::Store;
