use crate::components::{CoverImage, Icon, PlayerState};
use crate::model::{format_time, Track};
use dioxus::prelude::*;

/// One row in the track list: active/playing indicator, cover, titles, and
/// the duration once the active track's metadata has loaded.
#[component]
pub(super) fn TrackRow(track: Track, index: usize, onclick: EventHandler<MouseEvent>) -> Element {
    let player = use_context::<Signal<PlayerState>>();
    let state = player();
    let is_current = state.current_index == index;
    let number = index + 1;

    rsx! {
        button {
            r#type: "button",
            class: if is_current { "track-row is-active" } else { "track-row" },
            onclick: move |e| onclick.call(e),
            if is_current {
                span { class: "track-row-indicator",
                    Icon {
                        name: if state.playing { "pause".to_string() } else { "play".to_string() },
                        class: "track-row-indicator-icon".to_string(),
                    }
                }
            } else {
                span { class: "track-row-indicator track-row-number", "{number}" }
            }
            CoverImage {
                src: track.cover.clone(),
                alt: track.title.clone(),
                class: "track-row-cover".to_string(),
                sizes: "48px".to_string(),
            }
            div { class: "track-row-titles",
                p { class: "track-row-title", "{track.title}" }
                p { class: "track-row-artist", "{track.artist}" }
            }
            span { class: "track-row-duration",
                {
                    if is_current && state.duration > 0.0 {
                        format_time(state.duration)
                    } else {
                        "--:--".to_string()
                    }
                }
            }
        }
    }
}
