//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys::console`.
//! Native builds (tests, headless hosts) cannot call imported JS functions,
//! so there the helpers compile to nothing.
//!
//! Usage:
//! ```rust
//! use grotto_engine::console_log;
//!
//! let frames = 3;
//! console_log!("stepped {} frames", frames);
//! ```

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn log(_message: &str) {}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn warn(_message: &str) {}

/// `format!`-style info logging
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::console::log(&format!($($arg)*))
    };
}

/// `format!`-style warning logging
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::console::warn(&format!($($arg)*))
    };
}
