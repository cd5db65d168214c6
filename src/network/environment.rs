//! Where the resolver learns about the page it runs in.
//!
//! The browser implementation reads `window.location` and the optional
//! `window.API_BASE_URL` global. [`StaticEnvironment`] carries fixed values
//! for unit tests and for hosts without a `window`.

use wasm_bindgen::JsValue;

use crate::constants::API_BASE_URL_GLOBAL;

/// Page facts consulted once during origin resolution.
pub trait IPageEnvironment {
    /// Host name the page is served from (`window.location.hostname`).
    fn hostname(&self) -> Option<String>;
    /// Backend origin set by the embedding page before the module loaded.
    fn configured_base_url(&self) -> Option<String>;
}

/// Fixed answers, no browser access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub hostname: Option<String>,
    pub configured_base_url: Option<String>,
}

impl StaticEnvironment {
    pub fn with_hostname(hostname: &str) -> Self {
        Self {
            hostname: Some(hostname.to_string()),
            configured_base_url: None,
        }
    }

    pub fn with_override(mut self, base_url: &str) -> Self {
        self.configured_base_url = Some(base_url.to_string());
        self
    }
}

impl IPageEnvironment for StaticEnvironment {
    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }

    fn configured_base_url(&self) -> Option<String> {
        self.configured_base_url.clone()
    }
}

/// The live browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowEnvironment;

impl WindowEnvironment {
    fn window() -> Result<web_sys::Window, &'static str> {
        web_sys::window().ok_or("window unavailable")
    }
}

impl IPageEnvironment for WindowEnvironment {
    fn hostname(&self) -> Option<String> {
        let win = Self::window().ok()?;
        win.location().hostname().ok()
    }

    fn configured_base_url(&self) -> Option<String> {
        let win = Self::window().ok()?;
        let value = js_sys::Reflect::get(&win, &JsValue::from_str(API_BASE_URL_GLOBAL)).ok()?;
        value.as_string()
    }
}
