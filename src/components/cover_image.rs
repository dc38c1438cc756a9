use dioxus::prelude::*;

use crate::components::Icon;

/// Cover art at either of the two sizes the widget uses: large for the
/// now-playing panel, small for a track-list row. An empty source renders
/// the music-note fallback block instead of a broken image.
#[component]
pub fn CoverImage(
    src: String,
    alt: String,
    class: String,
    #[props(default = String::new())] sizes: String,
) -> Element {
    if src.is_empty() {
        return rsx! {
            div { class: "{class} cover-fallback",
                Icon { name: "music".to_string(), class: "cover-fallback-icon".to_string() }
            }
        };
    }

    rsx! {
        img {
            src: "{src}",
            alt: "{alt}",
            class: "{class}",
            sizes: "{sizes}",
            loading: "lazy",
            decoding: "async",
        }
    }
}
