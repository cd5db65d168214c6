use std::collections::BTreeMap;

use serde::Serialize;

/// Fetch credential mode (`RequestInit.credentials`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialsMode {
    Omit,
    SameOrigin,
    Include,
}

/// Fetch request mode (`RequestInit.mode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestMode {
    Cors,
    NoCors,
    SameOrigin,
}

/// Target of an outgoing call.
///
/// `Q` is whatever pre-built request object the transport understands
/// (`web_sys::Request` in the browser). Only `Url` values are ever rewritten.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<Q> {
    Url(String),
    Request(Q),
}

impl<Q> Resource<Q> {
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Resource::Url(url) => Some(url),
            Resource::Request(_) => None,
        }
    }
}

impl<Q> From<&str> for Resource<Q> {
    fn from(url: &str) -> Self {
        Resource::Url(url.to_string())
    }
}

impl<Q> From<String> for Resource<Q> {
    fn from(url: String) -> Self {
        Resource::Url(url)
    }
}

/// Options for a single call; serialises to a plain `RequestInit` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialsMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<RequestMode>,
}

impl RequestOptions {
    pub fn method(method: &str) -> Self {
        Self {
            method: Some(method.to_string()),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_credentials(mut self, credentials: CredentialsMode) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_mode(mut self, mode: RequestMode) -> Self {
        self.mode = Some(mode);
        self
    }
}
