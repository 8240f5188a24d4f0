mod components;
mod config;
mod input;
mod model;
mod render;
mod session;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    util::clog("minesweeper starting");
    yew::Renderer::<App>::new().render();
}
