//! AggieSource Frontend Entry Point

mod app;
mod auth;
mod components;
mod context;
mod dom;
mod logger;
mod storage;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    app::boot();
}
