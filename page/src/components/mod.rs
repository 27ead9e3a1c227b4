//! UI components rendered by the page.

pub mod detail_viewer;
