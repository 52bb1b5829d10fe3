//! Browser entry point. Trunk builds this into the WASM bundle that mounts
//! the app onto `<body>`.

use glampescape::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
