//! Small crate-wide convenience macros.

/// Log a formatted line to the browser console in debug wasm builds.
///
/// Release builds and non-wasm targets (native unit tests) compile the call
/// away, but the arguments are still type-checked so log lines can't rot.
///
/// ```rust,ignore
/// debug_log!("API origin resolved to {}", cfg.base_url());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(all(debug_assertions, target_arch = "wasm32")))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Same as [`debug_log!`] but routed to `console.warn` and kept in release
/// builds. Still a no-op off wasm.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
