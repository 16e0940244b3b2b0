mod app;
mod config;
mod containers;
mod error;
mod format;
mod gateway;
mod hooks;
mod models;
mod router;
mod storage;
mod views;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    yew::Renderer::<app::App>::new().render();
}
