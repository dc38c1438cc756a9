use dioxus::prelude::*;

mod components;
mod model;

use components::AppShell;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#18181b" }
        document::Stylesheet { href: PLAYER_CSS }

        AppShell {}
    }
}
