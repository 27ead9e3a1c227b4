//! Utility helpers shared by page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue (scroll, storage, DOM events) is isolated here so the
//! component stays a thin wiring layer over the `viewer` engine.

pub mod browser_page;
pub mod gesture_config;
pub mod input_map;
pub mod viewer_handle;
