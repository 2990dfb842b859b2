use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// A window `scroll` listener that lives exactly as long as this value.
/// Dropping the subscription removes the listener.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollSubscription {
    /// Registers `on_scroll`, which receives the vertical scroll offset in
    /// pixels on every scroll event.
    pub fn attach<F>(on_scroll: F) -> Result<Self, JsValue>
    where
        F: Fn(f64) + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;

        let source = window.clone();
        let callback = Closure::<dyn Fn()>::new(move || {
            if let Ok(offset) = source.scroll_y() {
                on_scroll(offset);
            }
        });

        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;

        Ok(Self { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove scroll listener: {:?}", err);
        }
    }
}

/// Current vertical scroll offset, or `0.0` outside a browser.
pub fn current_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Jumps the window back to the top of the document.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
