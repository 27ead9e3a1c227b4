//! `PageHost` over the browser window.
//!
//! Scroll position is `window.scrollY`; the scroll lock is
//! `overflow: hidden` on `<body>`, removed again on unlock so the page's own
//! stylesheet applies. Outside the browser every call is inert.

use viewer::overlay::PageHost;
use viewer::transform::Viewport;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl PageHost for BrowserPage {
    fn scroll_offset(&self) -> f64 {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return 0.0;
            };
            window.scroll_y().unwrap_or_else(|err| {
                log::warn!("viewer: failed to read scroll offset: {err:?}");
                0.0
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            0.0
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn set_scroll_offset(&mut self, offset: f64) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, offset);
            }
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn set_scroll_locked(&mut self, locked: bool) {
        #[cfg(feature = "csr")]
        {
            let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
                log::warn!("viewer: no document body to lock");
                return;
            };
            let style = body.style();
            let result = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
            if let Err(err) = result {
                log::warn!("viewer: failed to set scroll lock to {locked}: {err:?}");
            }
        }
    }

    fn viewport(&self) -> Viewport {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return Viewport::default();
            };
            let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.map_or(0.0, |v| v.as_f64().unwrap_or(0.0))
            };
            Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Viewport::default()
        }
    }
}
