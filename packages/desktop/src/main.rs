use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Exam Portal" }
        document::Stylesheet { href: ui::THEME_CSS }
        ui::PortalProvider {
            ui::Portal {}
        }
    }
}
