//! Thin wrappers over the browser APIs the client touches.
//!
//! Each helper is a no-op (or returns the neutral value) outside the
//! browser so components still render on native targets and in tests.

use crate::domain::models::RedirectSignal;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Anti-forgery token from `<meta name="csrf-token">`, if the page has one
pub fn csrf_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        document()?
            .query_selector(crate::shared::constants::CSRF_META_SELECTOR)
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// True when the page runs inside another window's iframe
pub fn is_embedded() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.parent() {
            Ok(Some(parent)) => {
                let parent: &wasm_bindgen::JsValue = parent.as_ref();
                let this: &wasm_bindgen::JsValue = window.as_ref();
                !js_sys::Object::is(parent, this)
            }
            _ => false,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Post a redirect request to the embedding window (target origin `*`)
pub fn post_to_parent(signal: &RedirectSignal) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(parent) = web_sys::window().and_then(|w| w.parent().ok().flatten()) else {
            return false;
        };
        match serde_wasm_bindgen::to_value(signal) {
            Ok(payload) => parent.post_message(&payload, "*").is_ok(),
            Err(e) => {
                tracing::error!("Failed to encode redirect signal: {}", e);
                false
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = signal;
        false
    }
}

/// Navigate without leaving a history entry
pub fn replace_location(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().replace(url) {
                tracing::error!("location.replace failed: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
    }
}

/// Navigate like following a link
pub fn assign_location(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("location.href assignment failed: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
    }
}

pub fn focus_element(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = element.focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

pub fn scroll_to_bottom(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = document().and_then(|d| d.get_element_by_id(id)) {
            element.set_scroll_top(element.scroll_height());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

/// Replace the `<body>` class list (theme switch)
pub fn set_body_class(class: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = document().and_then(|d| d.body()) {
            body.set_class_name(class);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = class;
    }
}

/// Stop the page behind the modal from scrolling
pub fn set_scroll_locked(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = document().and_then(|d| d.body()) {
            let _ = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "" });
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locked;
    }
}

pub fn storage_get(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(key)
            .ok()
            .flatten()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

pub fn storage_set(key: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, value);
    }
}

/// Registered `message` listener. Dropping it removes the listener from
/// the window, so a remounted page never stacks handlers.
pub struct RedirectListener {
    #[cfg(target_arch = "wasm32")]
    callback: Option<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MessageEvent)>>,
}

impl Drop for RedirectListener {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        if let (Some(callback), Some(window)) = (self.callback.take(), web_sys::window()) {
            let _ = window
                .remove_event_listener_with_callback("message", callback.as_ref().unchecked_ref());
        }
    }
}

/// Call `on_redirect(url)` for every `{action: "redirect", url}` message
/// posted to this window while the returned guard lives. Other messages are
/// ignored.
pub fn listen_for_redirects(on_redirect: impl FnMut(String) + 'static) -> RedirectListener {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return RedirectListener { callback: None };
        };

        let mut on_redirect = on_redirect;
        let callback = Closure::wrap(Box::new(move |event: web_sys::MessageEvent| {
            let signal = serde_wasm_bindgen::from_value::<serde_json::Value>(event.data())
                .ok()
                .and_then(RedirectSignal::from_value);
            if let Some(signal) = signal {
                on_redirect(signal.url);
            }
        }) as Box<dyn FnMut(web_sys::MessageEvent)>);

        if let Err(e) =
            window.add_event_listener_with_callback("message", callback.as_ref().unchecked_ref())
        {
            tracing::error!("Failed to register message listener: {:?}", e);
            return RedirectListener { callback: None };
        }
        RedirectListener {
            callback: Some(callback),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = on_redirect;
        RedirectListener {}
    }
}
