//! Ownership of the single media element and its notification stream.
//!
//! The widget owns exactly one `<audio>` element, appended to the document
//! body and found again by id. Commands (load, play, pause, seek) go down
//! through the helpers here; status comes back through event listeners that
//! mirror the element's reports into the shared [`PlayerState`] signal.
//! Everything is released again when the widget unmounts.

use dioxus::prelude::*;

use crate::components::PlayerState;
use crate::model::Track;

pub(crate) mod shortcuts;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "platter-audio";

#[cfg(target_arch = "wasm32")]
thread_local! {
    static MEDIA_LISTENERS: RefCell<Option<MediaListeners>> = RefCell::new(None);
}

/// Live event subscriptions on the audio element. Dropping removes every
/// listener, so notifications stop exactly at teardown.
#[cfg(target_arch = "wasm32")]
struct MediaListeners {
    audio: HtmlAudioElement,
    handlers: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for MediaListeners {
    fn drop(&mut self) {
        for (event, handler) in &self.handlers {
            let _ = self
                .audio
                .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }
    }
}

/// Initialize the audio element once.
#[cfg(target_arch = "wasm32")]
fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// Wire the element's status notifications into the shared state.
/// Idempotent: the first caller wins until [`release_media_element`].
#[cfg(target_arch = "wasm32")]
pub fn attach_media_listeners(player: Signal<PlayerState>, tracks: Signal<Vec<Track>>) {
    MEDIA_LISTENERS.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };

        let runtime = Runtime::current();
        let mut handlers: Vec<(&'static str, Closure<dyn FnMut()>)> = Vec::new();

        {
            let audio = audio.clone();
            let runtime = runtime.clone();
            let mut player = player.clone();
            handlers.push((
                "timeupdate",
                Closure::wrap(Box::new(move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    player.write().report_position(audio.current_time());
                }) as Box<dyn FnMut()>),
            ));
        }
        {
            let audio = audio.clone();
            let runtime = runtime.clone();
            let mut player = player.clone();
            handlers.push((
                "loadedmetadata",
                Closure::wrap(Box::new(move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    player.write().report_duration(audio.duration());
                }) as Box<dyn FnMut()>),
            ));
        }
        {
            let runtime = runtime.clone();
            let mut player = player.clone();
            handlers.push((
                "play",
                Closure::wrap(Box::new(move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    player.write().set_playing(true);
                }) as Box<dyn FnMut()>),
            ));
        }
        {
            let runtime = runtime.clone();
            let mut player = player.clone();
            handlers.push((
                "pause",
                Closure::wrap(Box::new(move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    player.write().set_playing(false);
                }) as Box<dyn FnMut()>),
            ));
        }
        {
            let runtime = runtime.clone();
            let mut player = player.clone();
            let tracks = tracks.clone();
            handlers.push((
                "ended",
                Closure::wrap(Box::new(move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    let count = tracks.peek().len();
                    player.write().track_ended(count);
                }) as Box<dyn FnMut()>),
            ));
        }

        for (event, handler) in &handlers {
            let _ = audio.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }

        shortcuts::attach_transport_shortcuts();

        *slot.borrow_mut() = Some(MediaListeners { audio, handlers });
    });
}

/// Teardown on unmount: stop notifications, silence the element, and
/// detach it from the document.
#[cfg(target_arch = "wasm32")]
pub fn release_media_element() {
    shortcuts::release_transport_shortcuts();
    MEDIA_LISTENERS.with(|slot| {
        slot.borrow_mut().take();
    });
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
            if let Ok(audio) = element.dyn_into::<HtmlAudioElement>() {
                let _ = audio.pause();
                audio.set_src("");
                let _ = audio.remove_attribute("src");
                audio.load();
                audio.remove();
            }
        }
    }
}

/// Load a new source into the element, optionally attempting playback.
#[cfg(target_arch = "wasm32")]
pub fn load_track(src: &str, autoplay: bool, player: Signal<PlayerState>) {
    let Some(audio) = get_or_create_audio_element() else {
        return;
    };
    audio.set_src(src);
    audio.load();
    if autoplay {
        request_play(player);
    }
}

/// Restart the already-loaded source from the top. Used when a wrap-around
/// lands on the track that is loaded anyway (single-track playlist).
#[cfg(target_arch = "wasm32")]
pub fn replay_from_start(player: Signal<PlayerState>) {
    let Some(audio) = get_or_create_audio_element() else {
        return;
    };
    audio.set_current_time(0.0);
    request_play(player);
}

/// Toggle against the element's actual paused state, not the mirrored flag.
#[cfg(target_arch = "wasm32")]
pub fn toggle_playback(player: Signal<PlayerState>) {
    let Some(audio) = get_or_create_audio_element() else {
        return;
    };
    if audio.paused() {
        request_play(player);
    } else {
        let _ = audio.pause();
    }
}

/// Seek the element directly. The caller mirrors the target into state.
#[cfg(target_arch = "wasm32")]
pub fn seek_to(seconds: f64) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_current_time(seconds.max(0.0));
    }
}

/// Ask the element to start playback. Success is only believed once the
/// `play` notification arrives; rejection (autoplay policy and the like)
/// is swallowed and leaves the state paused.
#[cfg(target_arch = "wasm32")]
fn request_play(mut player: Signal<PlayerState>) {
    let Some(audio) = get_or_create_audio_element() else {
        return;
    };
    match audio.play() {
        Ok(promise) => {
            spawn(async move {
                if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                    eprintln!("[audio] playback start rejected");
                    player.write().set_playing(false);
                }
            });
        }
        Err(_) => {
            eprintln!("[audio] playback start rejected");
            // May be reached from inside a running effect; write next tick.
            defer_state_update(move || {
                player.write().set_playing(false);
            });
        }
    }
}

/// Run `f` on the next tick, outside whatever effect is currently running.
pub fn defer_state_update<F>(f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(target_arch = "wasm32")]
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        f();
    });
    #[cfg(not(target_arch = "wasm32"))]
    spawn(async move {
        f();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn attach_media_listeners(_player: Signal<PlayerState>, _tracks: Signal<Vec<Track>>) {
    shortcuts::attach_transport_shortcuts();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn release_media_element() {
    shortcuts::release_transport_shortcuts();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_track(_src: &str, _autoplay: bool, _player: Signal<PlayerState>) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn replay_from_start(_player: Signal<PlayerState>) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn toggle_playback(_player: Signal<PlayerState>) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to(_seconds: f64) {}
