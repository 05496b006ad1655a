mod board;
mod components;
mod constants;
mod model;
mod rank;
mod registry;
mod state;
mod storage;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
