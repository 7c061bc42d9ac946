use leptos::prelude::*;
use pkgtracker_dashboard::{App, init_logging};

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("package tracker dashboard starting");
    mount_to_body(App);
}
