use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod overlay;

fn main() {
    yew::Renderer::<App>::new().render();
}
