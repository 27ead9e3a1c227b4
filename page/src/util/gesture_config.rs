//! Gesture config override from `localStorage`.
//!
//! A JSON `GestureConfig` stored under [`STORAGE_KEY`] replaces the built-in
//! sensitivities, which makes it possible to tune wheel and pinch feel on a
//! device without a rebuild. Anything unparsable or invalid is logged and the
//! defaults are used.

#[cfg(test)]
#[path = "gesture_config_test.rs"]
mod gesture_config_test;

use viewer::config::GestureConfig;

pub const STORAGE_KEY: &str = "invitation_viewer_gesture";

/// Load the override, falling back to defaults.
pub fn load_gesture_config() -> GestureConfig {
    parse_or_default(read_raw().as_deref())
}

/// Parse a stored override; `None` or an invalid value yields the defaults.
pub fn parse_or_default(raw: Option<&str>) -> GestureConfig {
    let Some(raw) = raw else {
        return GestureConfig::default();
    };
    match GestureConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("viewer: ignoring stored gesture config: {err}");
            GestureConfig::default()
        }
    }
}

fn read_raw() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = match web_sys::window()?.local_storage() {
            Ok(storage) => storage?,
            Err(err) => {
                log::warn!("viewer: localStorage unavailable: {err:?}");
                return None;
            }
        };
        match storage.get_item(STORAGE_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("viewer: failed to read {STORAGE_KEY}: {err:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
