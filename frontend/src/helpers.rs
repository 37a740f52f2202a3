//! Small browser utilities shared by the views.
//!
//! - **User Feedback**: `show_toast` injects a short-lived notification, the
//!   only user-facing error surface of the client. Details go to the console.
//! - **Timestamps**: `now_timestamp` stamps application and process times.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates a styled `div`, appends it to the body and removes it again after
/// three seconds. Silently does nothing if there is no document.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        html_toast.remove();
                    });
                }
            }
        }
    }
}

/// Current time as an ISO-8601 string, used for `ApplicationTime` and
/// `ProcessTime`.
pub fn now_timestamp() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}
