//! TradeMind UI - web entry point.

use trademind_ui::app::App;

fn main() {
    dioxus::logger::initialize_default();

    tracing::info!(
        "Starting TradeMind UI v{} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("TMUI_GIT_SHA")
    );

    dioxus::launch(App);
}
