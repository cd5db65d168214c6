// Re-export network modules
pub mod api_client;
pub mod config;
pub mod environment;
pub mod fetch;
pub mod js_api;
pub mod request;

// Re-export commonly used items
pub use api_client::{ApiClient, IFetchTransport};
pub use config::{ApiConfig, OriginSource};
pub use environment::{IPageEnvironment, StaticEnvironment, WindowEnvironment};
pub use fetch::BrowserFetch;
pub use request::{CredentialsMode, RequestMode, RequestOptions, Resource};

use lazy_static::lazy_static;
use std::sync::{PoisonError, RwLock};

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

/// Initialize the API configuration from the browser window. Runs from the
/// module's start hook; later calls return the stored value unchanged.
pub fn init_api_config() -> ApiConfig {
    init_api_config_from(&WindowEnvironment)
}

/// Same as [`init_api_config`] with an explicit page environment.
pub fn init_api_config_from(env: &dyn IPageEnvironment) -> ApiConfig {
    let mut slot = API_CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    init_slot(&mut slot, env).clone()
}

/// Fill an empty slot from `env`. A value already present (an override
/// installed before load) always wins.
pub(crate) fn init_slot<'a>(
    slot: &'a mut Option<ApiConfig>,
    env: &dyn IPageEnvironment,
) -> &'a ApiConfig {
    if let Some(existing) = slot.as_ref() {
        crate::debug_log!(
            "API config already set ({}), keeping {}",
            existing.source(),
            existing.base_url()
        );
    }
    slot.get_or_insert_with(|| {
        let config = ApiConfig::resolve(env);
        crate::debug_log!(
            "API origin resolved to {} ({})",
            config.base_url(),
            config.source()
        );
        config
    })
}

/// Replace the stored configuration. Used by the page's explicit override
/// hook; unlike initialisation this always writes.
pub fn set_api_config(config: ApiConfig) {
    crate::debug_log!("Installing API config override: {}", config.base_url());
    *API_CONFIG.write().unwrap_or_else(PoisonError::into_inner) = Some(config);
}

/// Current configuration, resolving it from the window on first use.
pub fn get_api_config() -> ApiConfig {
    let stored = API_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    stored.unwrap_or_else(init_api_config)
}

/// Get the base URL for API calls
pub fn get_api_base_url() -> String {
    get_api_config().base_url().to_string()
}

/// Qualify a backend path against the configured origin.
pub fn api_url(path: &str) -> String {
    get_api_config().url(path)
}

/// Shared client over `window.fetch` for Rust call sites.
pub fn api_client() -> ApiClient<BrowserFetch> {
    ApiClient::new(get_api_config(), BrowserFetch)
}
