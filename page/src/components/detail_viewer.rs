//! Thumbnails plus the full-screen pinch-zoom overlay.
//!
//! ARCHITECTURE
//! ============
//! The `viewer` crate owns gesture math and the scroll contract. This
//! component only maps DOM events into [`ViewerHandle`] calls and publishes
//! the results to two signals: the overlay's open state and the image
//! transform pushed by the render callback.

#[cfg(test)]
#[path = "detail_viewer_test.rs"]
mod detail_viewer_test;

use leptos::prelude::*;
use viewer::input::InputEvent;
use viewer::overlay::ViewerOverlay;
use viewer::transform::{Point, Transform};

use crate::util::browser_page::BrowserPage;
use crate::util::gesture_config::load_gesture_config;
#[cfg(feature = "csr")]
use crate::util::input_map::touch_points;
use crate::util::input_map::{TouchPhase, mouse_down_input, mouse_move_input, wheel_input};
use crate::util::viewer_handle::{ViewState, ViewerHandle};

/// An image that can be opened in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerImage {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Inline style for the zoomed image.
pub fn transform_style(transform: Transform) -> String {
    format!("transform: {}; transform-origin: center center;", transform.css())
}

/// Inline style for the backdrop. The browser's own pinch-zoom and touch
/// scrolling are disabled over it so only the viewer reacts to touches.
fn backdrop_style(open: bool) -> String {
    let display = if open { "flex" } else { "none" };
    format!("display: {display}; touch-action: none;")
}

/// Touch listener for one phase. The default is prevented so the browser
/// neither scrolls nor emits compatibility mouse events; a tap is raised
/// from the final `touchend` instead.
#[cfg(feature = "csr")]
fn touch_handler(
    handle: &ViewerHandle<BrowserPage>,
    phase: TouchPhase,
    view_state: RwSignal<ViewState>,
) -> impl Fn(leptos::ev::TouchEvent) + Clone + 'static + use<> {
    let handle = handle.clone();
    move |ev: leptos::ev::TouchEvent| {
        ev.prevent_default();
        if let Some(state) = handle.touch(phase, touch_points(&ev.touches())) {
            view_state.set(state);
        }
    }
}

#[cfg(not(feature = "csr"))]
fn touch_handler(
    _handle: &ViewerHandle<BrowserPage>,
    _phase: TouchPhase,
    _view_state: RwSignal<ViewState>,
) -> impl Fn(leptos::ev::TouchEvent) + Clone + 'static + use<> {
    |_ev: leptos::ev::TouchEvent| {}
}

#[component]
pub fn DetailViewer(images: Vec<ViewerImage>) -> impl IntoView {
    let view_state = RwSignal::new(ViewState::default());
    let transform = RwSignal::new(Transform::IDENTITY);
    let backdrop_ref = NodeRef::<leptos::html::Div>::new();

    let handle = {
        let mut overlay = ViewerOverlay::with_config(BrowserPage, load_gesture_config());
        overlay.set_render_callback(move |t| transform.set(t));
        ViewerHandle::new(overlay)
    };

    // Focus the backdrop once shown so Escape reaches it.
    Effect::new(move || {
        if !view_state.with(|s| s.is_open) {
            return;
        }
        if let Some(backdrop) = backdrop_ref.get() {
            if let Err(err) = backdrop.focus() {
                log::warn!("viewer: failed to focus overlay: {err:?}");
            }
        }
    });

    let thumbnails = images
        .into_iter()
        .map(|image| {
            let handle = handle.clone();
            let on_open = move |_ev: leptos::ev::MouseEvent| view_state.set(handle.open_image(image.src));
            view! {
                <button class="detail-viewer__thumb" on:click=on_open>
                    <img src=image.src alt=image.alt loading="lazy" draggable="false" />
                </button>
            }
        })
        .collect_view();

    let on_wheel = {
        let handle = handle.clone();
        move |ev: leptos::ev::WheelEvent| {
            ev.prevent_default();
            handle.forward(&wheel_input(ev.delta_y()));
        }
    };

    let on_mouse_down = {
        let handle = handle.clone();
        move |ev: leptos::ev::MouseEvent| {
            let point = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            if let Some(event) = mouse_down_input(ev.button(), point) {
                ev.prevent_default();
                handle.forward(&event);
            }
        }
    };

    let on_mouse_move = {
        let handle = handle.clone();
        move |ev: leptos::ev::MouseEvent| {
            let point = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            if let Some(event) = mouse_move_input(ev.buttons(), point) {
                handle.forward(&event);
            }
        }
    };

    let on_mouse_release = {
        let handle = handle.clone();
        move |_ev: leptos::ev::MouseEvent| {
            handle.forward(&InputEvent::PointerUp);
        }
    };

    let on_touch_start = touch_handler(&handle, TouchPhase::Start, view_state);
    let on_touch_move = touch_handler(&handle, TouchPhase::Move, view_state);
    let on_touch_end = touch_handler(&handle, TouchPhase::End, view_state);
    let on_touch_cancel = touch_handler(&handle, TouchPhase::Cancel, view_state);

    let on_backdrop_click = {
        let handle = handle.clone();
        move |_ev: leptos::ev::MouseEvent| view_state.set(handle.tap())
    };

    let on_close_click = {
        let handle = handle.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            view_state.set(handle.close());
        }
    };

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        let (consumed, state) = handle.key(&ev.key());
        if consumed {
            ev.prevent_default();
            view_state.set(state);
        }
    };

    let backdrop_css = move || backdrop_style(view_state.with(|s| s.is_open));
    let image_src = move || view_state.with(|s| s.image.clone().unwrap_or_default());
    let image_style = move || transform_style(transform.get());

    view! {
        <div class="detail-viewer">
            <div class="detail-viewer__thumbs">{thumbnails}</div>
            <div
                class="detail-viewer__backdrop"
                node_ref=backdrop_ref
                tabindex="-1"
                style=backdrop_css
                on:click=on_backdrop_click
                on:wheel=on_wheel
                on:mousedown=on_mouse_down
                on:mousemove=on_mouse_move
                on:mouseup=on_mouse_release.clone()
                on:mouseleave=on_mouse_release
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
                on:touchcancel=on_touch_cancel
                on:keydown=on_key_down
            >
                <button class="detail-viewer__close" on:click=on_close_click title="Close">
                    "×"
                </button>
                <img class="detail-viewer__image" src=image_src alt="Selected image" draggable="false" style=image_style />
            </div>
        </div>
    }
}
