pub mod app;
pub mod board_canvas;
pub mod game_buttons;
pub mod menu_panel;
pub mod status_line;

pub use app::App;
