use crate::app::App;

mod app;
mod components;
mod logger;
mod platform;
mod tops_sheet;

fn main() {
    logger::init();
    yew::Renderer::<App>::new().render();
}
