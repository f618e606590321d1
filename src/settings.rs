//! Game configuration from `localStorage`.
//!
//! The config is only ever read; game progress is not saved.

use crate::economy::Config;

/// localStorage key holding a JSON [`Config`].
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "money_clicker_config";

#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Load the config, falling back to defaults when none is stored or the
/// stored one is rejected.
#[cfg(target_arch = "wasm32")]
pub fn load_config() -> Config {
    let json = match get_storage().map(|s| s.get_item(STORAGE_KEY)) {
        Some(Ok(Some(json))) => json,
        _ => return Config::default(),
    };
    parse_or_default(&json)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> Config {
    Config::default()
}

#[cfg_attr(not(any(target_arch = "wasm32", test)), allow(dead_code))]
fn parse_or_default(json: &str) -> Config {
    match Config::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            crate::console::warn(&format!("ignoring stored config ({e}), using defaults"));
            Config::default()
        }
    }
}
