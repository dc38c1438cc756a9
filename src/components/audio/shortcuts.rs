//! Document-level keyboard shortcuts for the transport buttons.
//!
//! Hardware media keys and the space bar drive playback from anywhere on
//! the page by clicking the transport buttons by id, so the behavior stays
//! identical to a pointer press. Editable targets are left alone.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, Document, HtmlElement, KeyboardEvent};

#[cfg(target_arch = "wasm32")]
thread_local! {
    static SHORTCUT_LISTENER: RefCell<Option<ShortcutListener>> = RefCell::new(None);
}

#[cfg(target_arch = "wasm32")]
struct ShortcutListener {
    document: Document,
    handler: Closure<dyn FnMut(KeyboardEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ShortcutListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.handler.as_ref().unchecked_ref());
    }
}

#[cfg(target_arch = "wasm32")]
pub fn attach_transport_shortcuts() {
    SHORTCUT_LISTENER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };

        let handler = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if let Some(button_id) = shortcut_target_from_key(&event) {
                event.prevent_default();
                click_transport_button(button_id);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let _ = document.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(ShortcutListener { document, handler });
    });
}

#[cfg(target_arch = "wasm32")]
pub fn release_transport_shortcuts() {
    SHORTCUT_LISTENER.with(|slot| {
        slot.borrow_mut().take();
    });
}

#[cfg(target_arch = "wasm32")]
fn is_editable_shortcut_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element.has_attribute("contenteditable")
            && element
                .get_attribute("contenteditable")
                .map(|v| v.to_ascii_lowercase() != "false")
                .unwrap_or(true)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

#[cfg(target_arch = "wasm32")]
fn shortcut_target_from_key(event: &KeyboardEvent) -> Option<&'static str> {
    if event.default_prevented() || event.is_composing() || is_editable_shortcut_target(event) {
        return None;
    }

    let key = event.key();
    let code = event.code();

    if key == "MediaTrackNext" || code == "MediaTrackNext" {
        return Some("next-btn");
    }
    if key == "MediaTrackPrevious" || code == "MediaTrackPrevious" {
        return Some("prev-btn");
    }
    if key == "MediaPlayPause" || code == "MediaPlayPause" {
        return Some("play-pause-btn");
    }

    if !event.meta_key()
        && !event.ctrl_key()
        && !event.alt_key()
        && (key == " " || key == "Spacebar" || code == "Space")
    {
        return Some("play-pause-btn");
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn click_transport_button(id: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            if let Ok(button) = element.dyn_into::<HtmlElement>() {
                button.click();
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn attach_transport_shortcuts() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn release_transport_shortcuts() {}
