//! Constants for the frontend application
//!
//! Backend origins and the host names that count as local development live
//! here so the resolver and its tests agree on a single set of literals.

// Backend origins
pub const PRODUCTION_API_ORIGIN: &str = "https://medic-ai-back-end.onrender.com";
pub const LOCAL_DEV_API_ORIGIN: &str = "http://localhost:5000";

// Host names served by the local dev server
pub const LOCAL_DEV_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];

// Global the embedding page may set before the module loads
pub const API_BASE_URL_GLOBAL: &str = "API_BASE_URL";

// Request option keys / values shared with the JS surface
pub const CREDENTIALS_KEY: &str = "credentials";
pub const CREDENTIALS_INCLUDE: &str = "include";
// `RequestInit` dictionary members
pub const REQUEST_INIT_MEMBERS: [&str; 15] = [
    "method",
    "headers",
    "body",
    "referrer",
    "referrerPolicy",
    "mode",
    "credentials",
    "cache",
    "redirect",
    "integrity",
    "keepalive",
    "signal",
    "duplex",
    "priority",
    "window",
];
pub const CONTENT_TYPE_JSON: &str = "application/json";
