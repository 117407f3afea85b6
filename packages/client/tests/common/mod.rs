#![allow(dead_code)]

use std::convert::Infallible;
use std::sync::Mutex;

use sdkproxy_client::handler::{HandlerConfig, RequestHandlerBuilder};
use sdkproxy_client::proxy::{AgentOptions, ProxyAgentBuilder};
use sdkproxy_client::telemetry::RecordingSink;
use sdkproxy_client::{ProxyBinder, SdkClient};

/// Agent that remembers the URL it was built from.
pub type FakeAgent = String;

/// Handler that keeps the full build config for inspection.
pub type FakeHandler = HandlerConfig<FakeAgent>;

pub type FakeClient = SdkClient<FakeHandler>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentBuildError(pub String);

impl std::fmt::Display for AgentBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot build agent for {}", self.0)
    }
}

impl std::error::Error for AgentBuildError {}

#[derive(Debug, Default)]
pub struct RecordingAgentBuilder {
    calls: Mutex<Vec<(String, AgentOptions)>>,
    fail_on: Option<String>,
}

impl RecordingAgentBuilder {
    pub fn failing_on(url: &str) -> Self {
        Self {
            calls: Mutex::default(),
            fail_on: Some(url.to_owned()),
        }
    }

    pub fn calls(&self) -> Vec<(String, AgentOptions)> {
        self.calls.lock().expect("agent calls lock").clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|(url, _)| url).collect()
    }
}

impl ProxyAgentBuilder for RecordingAgentBuilder {
    type Agent = FakeAgent;
    type Error = AgentBuildError;

    fn build_agent(&self, proxy_url: &str, options: &AgentOptions) -> Result<FakeAgent, AgentBuildError> {
        self.calls
            .lock()
            .expect("agent calls lock")
            .push((proxy_url.to_owned(), options.clone()));
        if self.fail_on.as_deref() == Some(proxy_url) {
            return Err(AgentBuildError(proxy_url.to_owned()));
        }
        Ok(proxy_url.to_owned())
    }
}

#[derive(Debug, Default)]
pub struct RecordingHandlerBuilder {
    calls: Mutex<Vec<FakeHandler>>,
}

impl RecordingHandlerBuilder {
    pub fn calls(&self) -> Vec<FakeHandler> {
        self.calls.lock().expect("handler calls lock").clone()
    }
}

impl RequestHandlerBuilder<FakeAgent> for RecordingHandlerBuilder {
    type Handler = FakeHandler;
    type Error = Infallible;

    fn build_handler(&self, config: FakeHandler) -> Result<FakeHandler, Infallible> {
        self.calls.lock().expect("handler calls lock").push(config.clone());
        Ok(config)
    }
}

pub struct Harness {
    pub agents: RecordingAgentBuilder,
    pub handlers: RecordingHandlerBuilder,
    pub sink: RecordingSink,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_agents(RecordingAgentBuilder::default())
    }

    pub fn with_agents(agents: RecordingAgentBuilder) -> Self {
        Self {
            agents,
            handlers: RecordingHandlerBuilder::default(),
            sink: RecordingSink::new(),
        }
    }

    pub fn binder(
        &self,
    ) -> ProxyBinder<&RecordingAgentBuilder, &RecordingHandlerBuilder, &RecordingSink> {
        ProxyBinder::from_parts(&self.agents, &self.handlers, &self.sink)
    }
}
