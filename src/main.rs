//! CSR entry point. The whole site runs in the browser; this binary only
//! exists for the wasm bundler to build and mount the root component.

use clinic_site::app::App;

fn main() {
    // Panic messages and logs both go to the browser console.
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}
