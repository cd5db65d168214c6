use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::api_client::IFetchTransport;
use super::request::{RequestOptions, Resource};

/// `window.fetch`, unwrapped. Non-2xx responses come back as `Ok`; only
/// network-level failures reject.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetch;

impl BrowserFetch {
    /// Build the `RequestInit` dictionary for `options`.
    ///
    /// The JSON-compatible serializer matters: the default one turns the
    /// header map into a JS `Map`, which `fetch` silently ignores.
    pub fn request_init(options: &RequestOptions) -> Result<RequestInit, JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let init = options.serialize(&serializer)?;
        Ok(init.unchecked_into())
    }
}

impl IFetchTransport for BrowserFetch {
    type Request = Request;
    type Response = Response;
    type Error = JsValue;

    async fn fetch(
        &self,
        resource: Resource<Request>,
        options: Option<RequestOptions>,
    ) -> Result<Response, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;

        let promise = match (&resource, options.as_ref()) {
            (Resource::Url(url), Some(opts)) => {
                window.fetch_with_str_and_init(url, &Self::request_init(opts)?)
            }
            (Resource::Url(url), None) => window.fetch_with_str(url),
            (Resource::Request(req), Some(opts)) => {
                window.fetch_with_request_and_init(req, &Self::request_init(opts)?)
            }
            (Resource::Request(req), None) => window.fetch_with_request(req),
        };

        let resp_value = JsFuture::from(promise).await?;
        resp_value.dyn_into::<Response>()
    }
}
