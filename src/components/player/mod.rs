use crate::components::audio;
use crate::components::CoverImage;
use crate::model::{format_time, PlayerLabels, Track};
use dioxus::prelude::*;

mod controls;
mod state;
mod track_row;

#[cfg(test)]
mod tests;

pub use state::{PlayerState, PrevAction, SelectAction};

use controls::{NextButton, PlayPauseButton, PrevButton};
use track_row::TrackRow;

/// Playlist-driven player widget. The embedding page supplies the ordered
/// track sequence and the display labels; the widget owns the media element
/// for as long as it is mounted and renders nothing for an empty playlist.
#[component]
pub fn Player(tracks: Vec<Track>, labels: PlayerLabels) -> Element {
    let track_list = use_signal(move || tracks);
    let label_set = use_signal(move || labels);
    let player = use_signal(PlayerState::new);
    let last_src = use_signal(|| None::<String>);

    use_context_provider(|| player);
    use_context_provider(|| track_list);
    use_context_provider(|| label_set);

    // Acquire the media element and its notification stream on mount.
    {
        let track_list = track_list.clone();
        let player = player.clone();
        use_effect(move || {
            if track_list.peek().is_empty() {
                return;
            }
            audio::attach_media_listeners(player.clone(), track_list.clone());
        });
    }

    // Reload the element whenever the selection points at a new source. The
    // selection change already zeroed position/duration, so nothing stale
    // can show before the new source reports. A wrap-around onto the source
    // that is loaded anyway restarts it in place instead of reloading.
    {
        let track_list = track_list.clone();
        let player = player.clone();
        let mut last_src = last_src.clone();
        use_effect(move || {
            let state = player();
            let list = track_list();
            let Some(track) = list.get(state.current_index) else {
                return;
            };

            if last_src.peek().as_deref() == Some(track.src.as_str()) {
                if state.pending_autoplay {
                    let mut player = player.clone();
                    audio::defer_state_update(move || {
                        player.write().take_pending_autoplay();
                    });
                    audio::replay_from_start(player.clone());
                }
                return;
            }

            last_src.set(Some(track.src.clone()));
            let autoplay = state.pending_autoplay;
            if autoplay {
                let mut player = player.clone();
                audio::defer_state_update(move || {
                    player.write().take_pending_autoplay();
                });
            }
            audio::load_track(&track.src, autoplay, player.clone());
        });
    }

    use_drop(audio::release_media_element);

    let state = player();
    let list = track_list();
    let labels = label_set();

    if list.is_empty() {
        return rsx! {};
    }

    let current_index = state.current_index.min(list.len() - 1);
    let Some(current) = list.get(current_index).cloned() else {
        return rsx! {};
    };

    let position_label = format_time(state.position);
    let duration_label = format_time(state.duration);
    let seek_max = state.duration.max(0.0);
    let seek_fill = if state.duration > 0.0 {
        (state.position / state.duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    let on_seek_input = {
        let mut player = player.clone();
        move |e: Event<FormData>| {
            if let Ok(seconds) = e.value().parse::<f64>() {
                player.write().seek(seconds);
                audio::seek_to(seconds);
            }
        }
    };

    let on_seek_commit = {
        let mut player = player.clone();
        move |e: Event<FormData>| {
            if let Ok(seconds) = e.value().parse::<f64>() {
                player.write().seek(seconds);
                audio::seek_to(seconds);
            }
        }
    };

    let on_select = {
        let mut player = player.clone();
        let track_list = track_list.clone();
        move |index: usize| {
            let count = track_list.peek().len();
            let action = player.write().select(index, count);
            if action == SelectAction::Toggle {
                audio::toggle_playback(player.clone());
            }
        }
    };

    rsx! {
        section { class: "player",
            header { class: "player-header",
                h2 { class: "player-heading", "{labels.heading}" }
            }
            div { class: "now-playing",
                CoverImage {
                    src: current.cover.clone(),
                    alt: current.title.clone(),
                    class: "now-playing-cover".to_string(),
                    sizes: "(min-width: 640px) 320px, 60vw".to_string(),
                }
                div { class: "now-playing-meta",
                    p { class: "now-playing-title", "{current.title}" }
                    p { class: "now-playing-artist", "{current.artist}" }
                }
            }
            div { class: "transport",
                PrevButton {}
                PlayPauseButton {}
                NextButton {}
            }
            div { class: "seek-row",
                span { class: "seek-time", "{position_label}" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{seek_max}",
                    step: "0.1",
                    value: "{state.position}",
                    aria_label: labels.seek.clone(),
                    class: "seek-input",
                    style: "--seek-fill: {seek_fill}%",
                    oninput: on_seek_input,
                    onchange: on_seek_commit,
                }
                span { class: "seek-time seek-time-duration", "{duration_label}" }
            }
            section { class: "track-list",
                h3 { class: "track-list-heading", "{labels.track_list}" }
                ul { class: "track-list-items",
                    for (index , track) in list.iter().enumerate() {
                        li { key: "{track.id}",
                            TrackRow {
                                track: track.clone(),
                                index: index,
                                onclick: {
                                    let mut on_select = on_select.clone();
                                    move |_| on_select(index)
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
