//! Presence-checked writes against the live document.
//!
//! Every helper here is a silent no-op when the target is missing (no window,
//! no document, element absent). Renderers call these to mirror controller
//! state onto the document root; nothing in this module owns state of its
//! own.
//!
//! Native builds compile the same signatures as no-ops so the shared `ui`
//! crate (and its tests) build off-wasm.

#[cfg(target_arch = "wasm32")]
fn document_root() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Set or clear an attribute on `<html>`. `None` removes the attribute, which
/// is how the dark default is expressed (`data-theme` absent = dark).
#[cfg(target_arch = "wasm32")]
pub fn set_root_attribute(name: &str, value: Option<&str>) {
    if let Some(root) = document_root() {
        let result = match value {
            Some(value) => root.set_attribute(name, value),
            None => root.remove_attribute(name),
        };
        let _ = result;
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_root_attribute(_name: &str, _value: Option<&str>) {}

/// Mirror the resolved locale onto `<html lang dir>`.
#[cfg(target_arch = "wasm32")]
pub fn set_document_language(lang: &str, dir: &str) {
    if let Some(root) = document_root() {
        let _ = root.set_attribute("lang", lang);
        let _ = root.set_attribute("dir", dir);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_document_language(_lang: &str, _dir: &str) {}

/// Add or remove a marker class on `<html>` (theme transition, keyboard
/// focus styling).
#[cfg(target_arch = "wasm32")]
pub fn set_root_class(class: &str, on: bool) {
    if let Some(root) = document_root() {
        let list = root.class_list();
        let result = if on {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        let _ = result;
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_root_class(_class: &str, _on: bool) {}

/// Lock or restore body scrolling while the modal is open.
#[cfg(target_arch = "wasm32")]
pub fn lock_body_scroll(locked: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        let _ = result;
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn lock_body_scroll(_locked: bool) {}

/// Move keyboard focus to the element with `id`, if it exists.
#[cfg(target_arch = "wasm32")]
pub fn focus_element(id: &str) {
    use wasm_bindgen::JsCast;

    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        if let Ok(html) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = html.focus();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn focus_element(_id: &str) {}

/// Subscribe to window scroll; the callback receives the current `scrollY`.
/// The listener lives for the page's lifetime (leaked closure), which is the
/// lifetime the landing page needs.
#[cfg(target_arch = "wasm32")]
pub fn on_window_scroll(mut callback: impl FnMut(f64) + 'static) {
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let scroll_window = window.clone();
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let offset = scroll_window.scroll_y().unwrap_or(0.0);
        callback(offset);
    });
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_window_scroll(_callback: impl FnMut(f64) + 'static) {}

/// One document-level key press, with enough context to skip shortcuts
/// while the user is typing in a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub from_editable: bool,
}

/// Subscribe to document-level keydown.
#[cfg(target_arch = "wasm32")]
pub fn on_document_keydown(mut callback: impl FnMut(KeyPress) + 'static) {
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let closure =
        Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |event: web_sys::KeyboardEvent| {
            let from_editable = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .map(|element| {
                    let tag = element.tag_name();
                    tag == "INPUT" || tag == "TEXTAREA"
                })
                .unwrap_or(false);
            callback(KeyPress {
                key: event.key(),
                from_editable,
            });
        });
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_document_keydown(_callback: impl FnMut(KeyPress) + 'static) {}
