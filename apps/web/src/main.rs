use leptos::mount::mount_to_body;

mod app;
mod reveal;
mod transport;
mod ui;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("mounting KORA landing page");
    mount_to_body(App);
}
