mod app;
mod pages;

use app::SalesApp;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();
    yew::Renderer::<SalesApp>::new().render();
}

fn init_tracing() {
    // wasm32 has no system clock for the default timer
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(fmt_layer).init();
}
