use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!("starting seller order list");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
