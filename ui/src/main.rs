mod components;

use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialise logger");
    dioxus::launch(components::app::App);
}
