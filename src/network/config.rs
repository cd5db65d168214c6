use crate::constants::{LOCAL_DEV_API_ORIGIN, LOCAL_DEV_HOSTNAMES, PRODUCTION_API_ORIGIN};

use super::environment::IPageEnvironment;

/// Which rule produced the configured origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginSource {
    /// Set by the embedding page (`window.API_BASE_URL` or `initApiConfig`).
    Override,
    /// Baked in at compile time via the `API_BASE_URL` env var.
    BuildTime,
    /// Page served from `localhost` / `127.0.0.1`.
    LocalDevelopment,
    /// Nothing else matched.
    Production,
}

impl std::fmt::Display for OriginSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OriginSource::Override => write!(f, "override"),
            OriginSource::BuildTime => write!(f, "build-time"),
            OriginSource::LocalDevelopment => write!(f, "local-development"),
            OriginSource::Production => write!(f, "production"),
        }
    }
}

/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    // Scheme + host (+ port), never with a trailing slash.
    base_url: String,
    source: OriginSource,
}

impl Default for ApiConfig {
    /// The production backend. Used by unit tests and by any caller that
    /// reaches the network before `init_api_config()` ran; the bootstrap
    /// still resolves the real value from the page environment.
    fn default() -> Self {
        Self::production()
    }
}

impl ApiConfig {
    /// Resolve the backend origin for the current page.
    ///
    /// Precedence: a page-supplied override, then the local dev origin when
    /// the page is served from a local host name, then a compile-time
    /// `API_BASE_URL`, then production. The build-time value only ever
    /// replaces the production default.
    pub fn resolve(env: &dyn IPageEnvironment) -> Self {
        Self::resolve_with_build_time(env, option_env!("API_BASE_URL"))
    }

    /// [`ApiConfig::resolve`] with the build-time origin passed in.
    pub fn resolve_with_build_time(
        env: &dyn IPageEnvironment,
        build_time: Option<&str>,
    ) -> Self {
        if let Some(configured) = env.configured_base_url() {
            match non_blank(&configured) {
                Some(url) => return Self::with_source(url, OriginSource::Override),
                None => crate::warn_log!("Ignoring blank API base URL override"),
            }
        }
        if env.hostname().is_some_and(|host| is_local_hostname(&host)) {
            return Self::local_development();
        }
        match build_time.and_then(non_blank) {
            Some(url) => Self::with_source(url, OriginSource::BuildTime),
            None => Self::production(),
        }
    }

    /// Create a new ApiConfig from a URL string supplied by the embedding page
    pub fn from_url(url: &str) -> Self {
        Self::with_source(url, OriginSource::Override)
    }

    pub fn production() -> Self {
        Self::with_source(PRODUCTION_API_ORIGIN, OriginSource::Production)
    }

    pub fn local_development() -> Self {
        Self::with_source(LOCAL_DEV_API_ORIGIN, OriginSource::LocalDevelopment)
    }

    fn with_source(url: &str, source: OriginSource) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
            source,
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn source(&self) -> OriginSource {
        self.source
    }

    /// Get a full API URL for a given path. A missing leading `/` is added;
    /// callers must not pass absolute URLs.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// `true` for the host names the Flask dev server is reached through.
pub fn is_local_hostname(hostname: &str) -> bool {
    LOCAL_DEV_HOSTNAMES
        .iter()
        .any(|local| hostname.eq_ignore_ascii_case(local))
}

fn non_blank(url: &str) -> Option<&str> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
