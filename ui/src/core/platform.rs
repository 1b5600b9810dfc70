//! Platform probes consulted once at startup.
//!
//! Both probes feed the controllers' resolution orders and are only asked
//! when no persisted preference exists.

/// System light/dark hint (`prefers-color-scheme`). `None` when the platform
/// cannot answer, in which case the theme falls back to dark.
#[cfg(target_arch = "wasm32")]
pub fn system_prefers_light() -> Option<bool> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: light)")
        .ok()??;
    Some(query.matches())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn system_prefers_light() -> Option<bool> {
    None
}

/// First browser-reported locale tag, e.g. `"en-US"` or `"fa-IR"`.
#[cfg(target_arch = "wasm32")]
pub fn browser_language() -> Option<String> {
    let navigator = web_sys::window()?.navigator();
    navigator
        .languages()
        .get(0)
        .as_string()
        .or_else(|| navigator.language())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn browser_language() -> Option<String> {
    None
}

/// Fire-and-forget future on the browser event loop.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
