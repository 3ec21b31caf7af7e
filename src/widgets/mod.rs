mod highlight;
mod matrix_view;
mod palette;
mod theme;
mod widget;

pub use self::highlight::line_filter_highlight_layout;
pub use self::matrix_view::MatrixView;
pub use self::palette::Palette;
pub use self::theme::Theme;
pub use self::widget::AppWidget;
