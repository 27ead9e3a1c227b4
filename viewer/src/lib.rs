//! Gesture and lifecycle engine for the full-screen detail image viewer.
//!
//! This crate is browser-independent. It turns normalized pointer, touch and
//! wheel input into a bounded zoom/pan [`transform::Transform`], and owns the
//! open/close lifecycle of the overlay including the page scroll snapshot and
//! scroll lock. The host (the `page` crate in the browser) implements
//! [`overlay::PageHost`] and wires DOM events to [`overlay::ViewerOverlay`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`overlay`] | Open/close lifecycle, scroll save/restore, event routing |
//! | [`gesture`] | Zoom/pan state machine driven by wheel, drag and pinch |
//! | [`transform`] | Points, viewport and the bounded zoom/pan transform |
//! | [`input`] | Normalized input events and the pointer session |
//! | [`config`] | Tunable gesture limits and sensitivities |
//! | [`consts`] | Default numeric constants (scale limits, sensitivities) |

pub mod config;
pub mod consts;
pub mod gesture;
pub mod input;
pub mod overlay;
pub mod transform;
