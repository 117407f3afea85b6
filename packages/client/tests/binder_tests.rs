mod common;

use common::{AgentBuildError, FakeClient, FakeHandler, Harness, RecordingAgentBuilder};
use sdkproxy_client::error::NO_PROXY_MESSAGE;
use sdkproxy_client::proxy::{AgentOptions, MIXED_PROXY_WARNING};
use sdkproxy_client::telemetry::LogLevel;
use sdkproxy_client::{AddProxyError, AddProxyOptions, ClientWithConfig, ProxyEnv};
use serde_json::json;

fn env(pairs: &[(&str, &str)]) -> ProxyEnv {
    ProxyEnv::from_pairs(pairs.iter().copied())
}

fn installed(client: &FakeClient) -> &FakeHandler {
    client
        .request_handler()
        .expect("request handler should be installed")
}

#[test]
fn test_no_proxy_fails_by_default() {
    let harness = Harness::new();
    let mut client = FakeClient::new();

    let err = harness
        .binder()
        .bind(&mut client, &AddProxyOptions::default(), &ProxyEnv::empty())
        .expect_err("binding without a proxy should fail");

    assert!(err.is_no_proxy());
    assert_eq!(err.to_string(), NO_PROXY_MESSAGE);
    assert!(client.request_handler().is_none());
    assert!(harness.agents.calls().is_empty());
    assert!(harness.handlers.calls().is_empty());
}

#[test]
fn test_no_proxy_without_throw_leaves_client_untouched() {
    let harness = Harness::new();
    let previous = FakeHandler {
        http_agent: "previous".to_owned(),
        https_agent: "previous".to_owned(),
        connection_timeout: None,
        socket_timeout: None,
        handler_options: serde_json::Map::new(),
    };
    let mut client = FakeClient::new().with_request_handler(previous.clone());
    let options = AddProxyOptions::default().with_throw_on_no_proxy(false);

    let returned = harness
        .binder()
        .bind(&mut client, &options, &ProxyEnv::empty())
        .expect("binding should succeed");

    assert_eq!(returned.request_handler(), Some(&previous));
    assert!(harness.agents.calls().is_empty());
    assert!(harness.sink.lines().is_empty());
}

#[test]
fn test_http_proxy_only_is_used_for_both_slots() {
    let harness = Harness::new();
    let mut client = FakeClient::new();

    harness
        .binder()
        .bind(
            &mut client,
            &AddProxyOptions::default(),
            &env(&[("HTTP_PROXY", "http://localhost")]),
        )
        .expect("binding should succeed");

    assert_eq!(harness.agents.urls(), vec!["http://localhost"]);
    let handler = installed(&client);
    assert_eq!(handler.http_agent, "http://localhost");
    assert_eq!(handler.https_agent, "http://localhost");
}

#[test]
fn test_https_proxy_only_is_used_for_both_slots() {
    let harness = Harness::new();
    let mut client = FakeClient::new();

    harness
        .binder()
        .bind(
            &mut client,
            &AddProxyOptions::default(),
            &env(&[("HTTPS_PROXY", "https://localhost")]),
        )
        .expect("binding should succeed");

    assert_eq!(harness.agents.urls(), vec!["https://localhost"]);
    let handler = installed(&client);
    assert_eq!(handler.http_agent, "https://localhost");
    assert_eq!(handler.https_agent, "https://localhost");
}

#[test]
fn test_both_proxies_build_two_agents_and_warn() {
    let harness = Harness::new();
    let mut client = FakeClient::new();

    harness
        .binder()
        .bind(
            &mut client,
            &AddProxyOptions::default(),
            &env(&[
                ("HTTP_PROXY", "http://localhost"),
                ("HTTPS_PROXY", "https://localhost"),
            ]),
        )
        .expect("binding should succeed");

    assert_eq!(
        harness.agents.urls(),
        vec!["http://localhost", "https://localhost"]
    );
    let handler = installed(&client);
    assert_eq!(handler.http_agent, "http://localhost");
    assert_eq!(handler.https_agent, "https://localhost");
    assert_eq!(
        harness.sink.messages(LogLevel::Warn),
        vec![MIXED_PROXY_WARNING.to_owned()]
    );
    assert!(harness.sink.messages(LogLevel::Info).is_empty());
}

#[test]
fn test_https_only_with_both_proxies_uses_https_for_both_slots() {
    let harness = Harness::new();
    let mut client = FakeClient::new();
    let options = AddProxyOptions::default().with_https_only(true);

    harness
        .binder()
        .bind(
            &mut client,
            &options,
            &env(&[
                ("HTTPS_PROXY", "https://localhost"),
                ("HTTP_PROXY", "http://localhost"),
            ]),
        )
        .expect("binding should succeed");

    assert_eq!(harness.agents.urls(), vec!["https://localhost"]);
    let handler = installed(&client);
    assert_eq!(handler.http_agent, "https://localhost");
    assert_eq!(handler.https_agent, "https://localhost");
    assert!(harness.sink.messages(LogLevel::Warn).is_empty());
}

#[test]
fn test_https_only_with_lowercase_https_proxy() {
    let harness = Harness::new();
    let mut client = FakeClient::new();
    let options = AddProxyOptions::default().with_https_only(true);

    harness
        .binder()
        .bind(&mut client, &options, &env(&[("https_proxy", "https://localhost")]))
        .expect("binding should succeed");

    assert_eq!(harness.agents.urls(), vec!["https://localhost"]);
}

#[test]
fn test_https_only_with_only_http_proxy_is_no_proxy() {
    let harness = Harness::new();
    let mut client = FakeClient::new();
    let options = AddProxyOptions::default().with_https_only(true);

    let err = harness
        .binder()
        .bind(&mut client, &options, &env(&[("HTTP_PROXY", "http://localhost")]))
        .expect_err("https_only without an https proxy should fail");

    assert!(err.is_no_proxy());
    assert!(harness.agents.calls().is_empty());
}

#[test]
fn test_explicit_options_take_precedence_over_env() {
    let harness = Harness::new();
    let mut client = FakeClient::new();
    let options = AddProxyOptions::default()
        .with_http_proxy("http://explicit:3128")
        .with_https_proxy("https://explicit:8443");

    harness
        .binder()
        .bind(
            &mut client,
            &options,
            &env(&[
                ("http_proxy", "http://from-env"),
                ("HTTPS_PROXY", "https://from-env"),
            ]),
        )
        .expect("binding should succeed");

    assert_eq!(
        harness.agents.urls(),
        vec!["http://explicit:3128", "https://explicit:8443"]
    );
}

#[test]
fn test_both_proxies_from_options_without_env() {
    let harness = Harness::new();
    let mut client = FakeClient::new();
    let options = AddProxyOptions::default()
        .with_http_proxy("http://localhost")
        .with_https_proxy("https://localhost");

    harness
        .binder()
        .bind(&mut client, &options, &ProxyEnv::empty())
        .expect("binding should succeed");

    assert_eq!(
        harness.agents.urls(),
        vec!["http://localhost", "https://localhost"]
    );
}

#[test]
fn test_debug_emits_exactly_one_info_line() {
    let harness = Harness::new();
    let mut client = FakeClient::new();
    let options = AddProxyOptions::default().with_debug(true);

    harness
        .binder()
        .bind(&mut client, &options, &env(&[("HTTP_PROXY", "http://localhost")]))
        .expect("binding should succeed");

    let info = harness.sink.messages(LogLevel::Info);
    assert_eq!(info.len(), 1);
    assert!(info[0].contains("http://localhost"));
}

#[test]
fn test_debug_in_mixed_mode_names_both_urls() {
    let harness = Harness::new();
    let mut client = FakeClient::new();
    let options = AddProxyOptions::default().with_debug(true);

    harness
        .binder()
        .bind(
            &mut client,
            &options,
            &env(&[
                ("HTTP_PROXY", "http://plain"),
                ("HTTPS_PROXY", "https://secure"),
            ]),
        )
        .expect("binding should succeed");

    let info = harness.sink.messages(LogLevel::Info);
    assert_eq!(info.len(), 1);
    assert!(info[0].contains("http://plain"));
    assert!(info[0].contains("https://secure"));
    assert_eq!(harness.sink.messages(LogLevel::Warn).len(), 1);
}

#[test]
fn test_debug_off_emits_nothing() {
    let harness = Harness::new();
    let mut client = FakeClient::new();

    harness
        .binder()
        .bind(
            &mut client,
            &AddProxyOptions::default(),
            &env(&[("HTTP_PROXY", "http://localhost")]),
        )
        .expect("binding should succeed");

    assert!(harness.sink.lines().is_empty());
}

#[test]
fn test_debug_logs_before_failing_without_proxy() {
    let harness = Harness::new();
    let mut client = FakeClient::new();
    let options = AddProxyOptions::default().with_debug(true);

    let result = harness.binder().bind(&mut client, &options, &ProxyEnv::empty());

    assert!(result.is_err());
    assert_eq!(harness.sink.messages(LogLevel::Info).len(), 1);
}

#[test]
fn test_agent_options_are_forwarded() {
    let harness = Harness::new();
    let mut client = FakeClient::new();
    let agent_options: AgentOptions = [
        ("keepAlive", json!(true)),
        ("keepAliveMsecs", json!(1000)),
        ("maxSockets", json!(256)),
        ("proxyRequestOptions", json!({ "ca": ["sample-cert"] })),
    ]
    .into_iter()
    .collect();
    let options = AddProxyOptions::default().with_agent_options(agent_options.clone());

    harness
        .binder()
        .bind(&mut client, &options, &env(&[("http_proxy", "http://localhost")]))
        .expect("binding should succeed");

    let calls = harness.agents.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, agent_options);
}

#[test]
fn test_timeouts_and_handler_options_are_forwarded() {
    let harness = Harness::new();
    let mut client = FakeClient::new();
    let options = AddProxyOptions::default()
        .with_connection_timeout(std::time::Duration::from_millis(100))
        .with_handler_option("maxRetries", 3);
    let options = AddProxyOptions {
        socket_timeout: Some(10),
        ..options
    };

    harness
        .binder()
        .bind(&mut client, &options, &env(&[("HTTP_PROXY", "http://localhost")]))
        .expect("binding should succeed");

    let calls = harness.handlers.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].connection_timeout, Some(100));
    assert_eq!(calls[0].socket_timeout, Some(10));
    assert_eq!(calls[0].handler_options.get("maxRetries"), Some(&json!(3)));
}

#[test]
fn test_agent_failure_propagates_unchanged() {
    let harness = Harness::with_agents(RecordingAgentBuilder::failing_on("https://broken"));
    let mut client = FakeClient::new();

    let err = harness
        .binder()
        .bind(
            &mut client,
            &AddProxyOptions::default(),
            &env(&[
                ("HTTP_PROXY", "http://fine"),
                ("HTTPS_PROXY", "https://broken"),
            ]),
        )
        .expect_err("agent failure should propagate");

    assert!(err.is_agent());
    assert_eq!(
        err.into_agent_error(),
        Some(AgentBuildError("https://broken".to_owned()))
    );
    assert!(client.request_handler().is_none());
    assert!(harness.handlers.calls().is_empty());
}

#[test]
fn test_returns_the_same_client() {
    let harness = Harness::new();
    let mut client = FakeClient::new().with_region("eu-west-1");
    let address = std::ptr::addr_of!(client);

    let returned = harness
        .binder()
        .bind(
            &mut client,
            &AddProxyOptions::default(),
            &env(&[("HTTPS_PROXY", "https://localhost")]),
        )
        .expect("binding should succeed");

    assert!(std::ptr::eq(address, &*returned));
    assert_eq!(returned.config.region.as_deref(), Some("eu-west-1"));
}

#[test]
fn test_no_proxy_error_matches_variant() {
    let harness = Harness::new();
    let mut client = FakeClient::new();

    let result = harness
        .binder()
        .bind(&mut client, &AddProxyOptions::default(), &ProxyEnv::empty());

    assert!(matches!(result, Err(AddProxyError::NoProxyConfigured)));
}
