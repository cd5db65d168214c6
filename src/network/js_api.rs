//! Functions exported to the page's other scripts.
//!
//! `apiFetch` keeps the `fetch(resource, init)` signature so existing call
//! sites only swap the function name; the global `fetch` is left alone.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::config::ApiConfig;
use super::request::Resource;
use crate::constants::{CREDENTIALS_INCLUDE, CREDENTIALS_KEY, REQUEST_INIT_MEMBERS};

/// Initialize the API configuration from a JS-provided URL.
/// Always replaces whatever was resolved before.
#[wasm_bindgen(js_name = initApiConfig)]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    if api_base_url.trim().is_empty() {
        return Err(JsValue::from_str("API base URL must not be empty"));
    }
    super::set_api_config(ApiConfig::from_url(api_base_url));
    Ok(())
}

#[wasm_bindgen(js_name = apiBaseUrl)]
pub fn api_base_url_js() -> String {
    super::get_api_base_url()
}

#[wasm_bindgen(js_name = apiUrl)]
pub fn api_url_js(path: &str) -> String {
    super::api_url(path)
}

/// Drop-in for `fetch`: qualifies `/path` strings and defaults
/// `credentials` to `"include"`. Resolves or rejects exactly like `fetch`.
#[wasm_bindgen(js_name = apiFetch)]
pub async fn api_fetch_js(resource: JsValue, init: JsValue) -> Result<JsValue, JsValue> {
    let config = super::get_api_config();
    let resource = qualify_resource(&config, resource);
    let init = with_default_credentials(&init)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
    let fetch: Function = Reflect::get(&window, &JsValue::from_str("fetch"))?.dyn_into()?;
    let promise: js_sys::Promise = fetch.call2(&window, &resource, &init)?.dyn_into()?;
    JsFuture::from(promise).await
}

/// Rewrite only string resources that are bare paths. URL objects,
/// `Request` objects and absolute strings are returned as given.
pub fn qualify_resource(config: &ApiConfig, resource: JsValue) -> JsValue {
    let target: Resource<JsValue> = match resource.as_string() {
        Some(url) => Resource::Url(url),
        None => Resource::Request(resource),
    };
    match target {
        Resource::Url(path) if path.starts_with('/') => JsValue::from_str(&config.url(&path)),
        Resource::Url(url) => JsValue::from_str(&url),
        Resource::Request(value) => value,
    }
}

/// Copy of `init` with `credentials: "include"` added when the member is
/// missing, `undefined` or `null`. Any other value, including `"omit"` or
/// an empty string, is kept.
///
/// `fetch` reads `RequestInit` members through the prototype chain and
/// getters, so those are read off `init` member by member; `Object.assign`
/// alone would only see own enumerable properties.
pub fn with_default_credentials(init: &JsValue) -> Result<JsValue, JsValue> {
    let copy = Object::new();
    if init.is_object() {
        Object::assign(&copy, init.unchecked_ref());
        for member in REQUEST_INIT_MEMBERS {
            let key = JsValue::from_str(member);
            let value = Reflect::get(init, &key)?;
            if !value.is_undefined() {
                Reflect::set(&copy, &key, &value)?;
            }
        }
    } else if !init.is_undefined() && !init.is_null() {
        return Err(JsValue::from_str("fetch init must be an object"));
    }

    let key = JsValue::from_str(CREDENTIALS_KEY);
    let current = Reflect::get(&copy, &key)?;
    if current.is_undefined() || current.is_null() {
        Reflect::set(&copy, &key, &JsValue::from_str(CREDENTIALS_INCLUDE))?;
    }
    Ok(copy.into())
}
