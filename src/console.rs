//! Browser console logging.
//!
//! Off wasm32 these are no-ops, so native unit tests never call into JS.

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&format!("money-clicker: {msg}").into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&format!("money-clicker: {msg}").into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn warn(_msg: &str) {}
