use super::config::ApiConfig;
use super::request::{CredentialsMode, RequestOptions, Resource};
use crate::constants::CONTENT_TYPE_JSON;

/// Anything that can issue a fetch-style request.
///
/// `ApiClient` implements this itself, so a decorated client can be handed
/// to code that only knows the plain transport interface.
#[allow(async_fn_in_trait)]
pub trait IFetchTransport {
    /// Pre-built request object accepted in place of a URL.
    type Request;
    type Response;
    type Error;

    async fn fetch(
        &self,
        resource: Resource<Self::Request>,
        options: Option<RequestOptions>,
    ) -> Result<Self::Response, Self::Error>;
}

// REST client that points relative paths at the configured backend and
// always sends credentials unless the caller chose a mode.
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: IFetchTransport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL for a backend path.
    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// Rewrite a call the way `fetch` forwards it: bare `/path` strings are
    /// qualified against the backend origin, everything else is untouched,
    /// and a missing credential mode becomes `include`.
    pub fn prepare(
        &self,
        resource: Resource<T::Request>,
        options: Option<RequestOptions>,
    ) -> (Resource<T::Request>, RequestOptions) {
        let resource = match resource {
            Resource::Url(path) if path.starts_with('/') => Resource::Url(self.config.url(&path)),
            other => other,
        };

        let mut options = options.unwrap_or_default();
        if options.credentials.is_none() {
            options.credentials = Some(CredentialsMode::Include);
        }

        (resource, options)
    }

    // ---------------- Convenience calls ----------------

    pub async fn get(&self, path: &str) -> Result<T::Response, T::Error> {
        self.send(path, RequestOptions::method("GET")).await
    }

    pub async fn delete(&self, path: &str) -> Result<T::Response, T::Error> {
        self.send(path, RequestOptions::method("DELETE")).await
    }

    /// POST a JSON body (already serialised by the caller).
    pub async fn post_json(&self, path: &str, body: &str) -> Result<T::Response, T::Error> {
        self.send(path, Self::json_options("POST", body)).await
    }

    pub async fn put_json(&self, path: &str, body: &str) -> Result<T::Response, T::Error> {
        self.send(path, Self::json_options("PUT", body)).await
    }

    async fn send(&self, path: &str, options: RequestOptions) -> Result<T::Response, T::Error> {
        // Paths without a leading slash are still backend paths here, so
        // qualify before handing off instead of relying on `prepare`.
        let resource = Resource::Url(self.config.url(path));
        self.fetch(resource, Some(options)).await
    }

    fn json_options(method: &str, body: &str) -> RequestOptions {
        RequestOptions::method(method)
            .with_header("Content-Type", CONTENT_TYPE_JSON)
            .with_body(body)
    }
}

impl<T: IFetchTransport> IFetchTransport for ApiClient<T> {
    type Request = T::Request;
    type Response = T::Response;
    type Error = T::Error;

    async fn fetch(
        &self,
        resource: Resource<Self::Request>,
        options: Option<RequestOptions>,
    ) -> Result<Self::Response, Self::Error> {
        let (resource, options) = self.prepare(resource, options);
        self.transport.fetch(resource, Some(options)).await
    }
}
