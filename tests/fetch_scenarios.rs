//! End-to-end behaviour of the public networking API with an in-memory
//! transport standing in for `window.fetch`.
//!
//! Run with: cargo test --test fetch_scenarios

use std::cell::RefCell;

use futures::executor::block_on;
use mediai_frontend::constants::{LOCAL_DEV_API_ORIGIN, PRODUCTION_API_ORIGIN};
use mediai_frontend::network::{
    self, ApiClient, ApiConfig, CredentialsMode, IFetchTransport, OriginSource, RequestOptions,
    Resource, StaticEnvironment,
};

#[derive(Default)]
struct Recorder {
    seen: RefCell<Vec<(String, RequestOptions)>>,
}

impl IFetchTransport for Recorder {
    type Request = String;
    type Response = &'static str;
    type Error = &'static str;

    async fn fetch(
        &self,
        resource: Resource<String>,
        options: Option<RequestOptions>,
    ) -> Result<&'static str, &'static str> {
        let url = match resource {
            Resource::Url(url) | Resource::Request(url) => url,
        };
        self.seen
            .borrow_mut()
            .push((url, options.ok_or("options were not forwarded")?));
        Ok("ok")
    }
}

#[test]
fn chat_request_from_production_page() {
    let env = StaticEnvironment::with_hostname("mediai-lovat.vercel.app");
    let client = ApiClient::new(ApiConfig::resolve_with_build_time(&env, None), Recorder::default());
    assert_eq!(client.config().base_url(), PRODUCTION_API_ORIGIN);

    let options = RequestOptions::method("POST").with_body("{}");
    block_on(client.fetch("/chat".into(), Some(options))).unwrap();

    let seen = client.transport().seen.borrow();
    assert_eq!(seen[0].0, "https://medic-ai-back-end.onrender.com/chat");
    assert_eq!(seen[0].1.method.as_deref(), Some("POST"));
    assert_eq!(seen[0].1.body.as_deref(), Some("{}"));
    assert_eq!(seen[0].1.credentials, Some(CredentialsMode::Include));
}

#[test]
fn local_page_never_reaches_production() {
    let env = StaticEnvironment::with_hostname("127.0.0.1");
    let client = ApiClient::new(ApiConfig::resolve_with_build_time(&env, None), Recorder::default());

    block_on(client.get("/doctor/patients")).unwrap();
    block_on(client.delete("health_goals/3")).unwrap();

    let seen = client.transport().seen.borrow();
    assert!(seen
        .iter()
        .all(|(url, _)| url.starts_with(LOCAL_DEV_API_ORIGIN)));
}

#[test]
fn production_build_origin_is_ignored_on_local_page() {
    let env = StaticEnvironment::with_hostname("localhost");
    let cfg = ApiConfig::resolve_with_build_time(&env, Some(PRODUCTION_API_ORIGIN));
    assert_eq!(cfg.base_url(), LOCAL_DEV_API_ORIGIN);
    assert_eq!(cfg.source(), OriginSource::LocalDevelopment);
}

#[test]
fn opt_out_of_credentials_is_respected() {
    let client = ApiClient::new(ApiConfig::production(), Recorder::default());
    let options = RequestOptions::method("GET").with_credentials(CredentialsMode::Omit);
    block_on(client.fetch("/health".into(), Some(options))).unwrap();

    let seen = client.transport().seen.borrow();
    assert_eq!(seen[0].1.credentials, Some(CredentialsMode::Omit));
}

// The only test in this binary that touches the process-wide slot.
#[test]
fn global_config_is_set_once_and_overridable() {
    network::set_api_config(ApiConfig::from_url("https://preset.example/"));

    let cfg = network::init_api_config_from(&StaticEnvironment::with_hostname("localhost"));
    assert_eq!(cfg.base_url(), "https://preset.example");
    assert_eq!(cfg.source(), OriginSource::Override);
    assert_eq!(network::api_url("sessions"), "https://preset.example/sessions");

    network::set_api_config(ApiConfig::local_development());
    assert_eq!(network::get_api_base_url(), LOCAL_DEV_API_ORIGIN);
    assert_eq!(mediai_frontend::api_url("/chat"), "http://localhost:5000/chat");
}
