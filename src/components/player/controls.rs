use crate::components::{audio, Icon, PlayerState, PrevAction};
use crate::model::{PlayerLabels, Track};
use dioxus::prelude::*;

/// Play/Pause button - completely isolated component
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let player = use_context::<Signal<PlayerState>>();
    let labels = use_context::<Signal<PlayerLabels>>();
    let playing = player().playing;

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "transport-btn transport-btn-primary",
            aria_label: if playing { labels().pause } else { labels().play },
            onclick: move |_| audio::toggle_playback(player.clone()),
            if playing {
                Icon {
                    name: "pause".to_string(),
                    class: "transport-icon".to_string(),
                }
            } else {
                Icon {
                    name: "play".to_string(),
                    class: "transport-icon transport-icon-play".to_string(),
                }
            }
        }
    }
}

/// Previous button - rewinds late in a track, otherwise steps back with wrap
#[component]
pub(super) fn PrevButton() -> Element {
    let mut player = use_context::<Signal<PlayerState>>();
    let tracks = use_context::<Signal<Vec<Track>>>();
    let labels = use_context::<Signal<PlayerLabels>>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "transport-btn",
            aria_label: labels().previous,
            onclick: move |_| {
                let count = tracks.peek().len();
                let action = player.write().previous(count);
                if action == PrevAction::Rewound {
                    audio::seek_to(0.0);
                }
            },
            Icon { name: "prev".to_string(), class: "transport-icon".to_string() }
        }
    }
}

/// Next button - steps forward with wrap, always arming autoplay
#[component]
pub(super) fn NextButton() -> Element {
    let mut player = use_context::<Signal<PlayerState>>();
    let tracks = use_context::<Signal<Vec<Track>>>();
    let labels = use_context::<Signal<PlayerLabels>>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "transport-btn",
            aria_label: labels().next,
            onclick: move |_| {
                let count = tracks.peek().len();
                player.write().next(count);
            },
            Icon { name: "next".to_string(), class: "transport-icon".to_string() }
        }
    }
}
