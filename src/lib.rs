//! MediAI frontend networking.
//!
//! Decides which backend origin the page talks to and wraps `fetch` so
//! relative API paths reach that origin with credentials attached.

use wasm_bindgen::prelude::*;

#[macro_use]
mod macros;

pub mod constants;
pub mod network;

pub use network::{api_client, api_url, get_api_base_url, ApiClient, ApiConfig};

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    // Resolve the backend origin before any page script can issue a request.
    // `window.API_BASE_URL`, when the page sets it, takes precedence.
    network::init_api_config();

    Ok(())
}
