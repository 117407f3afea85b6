use std::sync::{Arc, Mutex};

use sdkproxy_client::telemetry::LOG_TARGET;
use sdkproxy_client::{AddProxyOptions, ProxyBinder, ProxyEnv, SdkClient};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

/// Subscriber that keeps the level of every event on the proxy log target.
#[derive(Clone, Default)]
struct TargetEvents {
    levels: Arc<Mutex<Vec<Level>>>,
}

impl TargetEvents {
    fn levels(&self) -> Vec<Level> {
        self.levels.lock().expect("levels lock").clone()
    }
}

impl Subscriber for TargetEvents {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let metadata = event.metadata();
        if metadata.target() == LOG_TARGET {
            self.levels
                .lock()
                .expect("levels lock")
                .push(*metadata.level());
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn bind_traced(options: &AddProxyOptions, env: &ProxyEnv) -> Vec<Level> {
    let events = TargetEvents::default();
    tracing::subscriber::with_default(events.clone(), || {
        let mut client: SdkClient = SdkClient::new();
        let _ = ProxyBinder::new().bind(&mut client, options, env);
    });
    events.levels()
}

#[test]
fn test_debug_off_emits_nothing() {
    let env = ProxyEnv::from_pairs([("HTTP_PROXY", "http://localhost")]);

    let levels = bind_traced(&AddProxyOptions::default(), &env);

    assert!(levels.is_empty(), "unexpected events: {levels:?}");
}

#[test]
fn test_debug_off_emits_nothing_when_failing() {
    let levels = bind_traced(&AddProxyOptions::default(), &ProxyEnv::empty());

    assert!(levels.is_empty(), "unexpected events: {levels:?}");
}

#[test]
fn test_debug_off_emits_nothing_without_proxy_when_not_throwing() {
    let options = AddProxyOptions::new().with_throw_on_no_proxy(false);

    let levels = bind_traced(&options, &ProxyEnv::empty());

    assert!(levels.is_empty(), "unexpected events: {levels:?}");
}

#[test]
fn test_debug_on_emits_one_info_event() {
    let env = ProxyEnv::from_pairs([("HTTPS_PROXY", "https://localhost")]);
    let options = AddProxyOptions::new().with_debug(true);

    let levels = bind_traced(&options, &env);

    assert_eq!(levels, vec![Level::INFO]);
}

#[test]
fn test_mixed_without_debug_emits_only_the_warning() {
    let env = ProxyEnv::from_pairs([
        ("HTTP_PROXY", "http://localhost"),
        ("HTTPS_PROXY", "https://localhost"),
    ]);

    let levels = bind_traced(&AddProxyOptions::default(), &env);

    assert_eq!(levels, vec![Level::WARN]);
}
