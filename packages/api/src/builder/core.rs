//! Core `ProxyBuilder` structure and base functionality
//!
//! The builder collects `AddProxyOptions`, an optional environment snapshot
//! and the collaborators, then binds onto a client in one call.

use sdkproxy_client::binder::ProxyBinder;
use sdkproxy_client::config::{AddProxyOptions, ProxyEnv};
use sdkproxy_client::handler::HttpHandlerBuilder;
use sdkproxy_client::proxy::DefaultAgentBuilder;
use sdkproxy_client::telemetry::TracingSink;

/// Fluent builder for attaching a proxy to a client.
///
/// Without an explicit [`ProxyBuilder::env`] the process environment is read
/// when the builder binds.
#[derive(Debug, Clone)]
pub struct ProxyBuilder<A = DefaultAgentBuilder, R = HttpHandlerBuilder, S = TracingSink> {
    pub(crate) binder: ProxyBinder<A, R, S>,
    pub(crate) options: AddProxyOptions,
    pub(crate) env: Option<ProxyEnv>,
}

impl ProxyBuilder {
    /// Builder with default options and collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            binder: ProxyBinder::new(),
            options: AddProxyOptions::default(),
            env: None,
        }
    }
}

impl Default for ProxyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R, S> ProxyBuilder<A, R, S> {
    /// Options accumulated so far.
    #[must_use]
    pub fn current_options(&self) -> &AddProxyOptions {
        &self.options
    }

    /// Environment snapshot the builder will bind with, if one was set.
    #[must_use]
    pub fn current_env(&self) -> Option<&ProxyEnv> {
        self.env.as_ref()
    }

    /// Use a custom proxy-agent builder.
    pub fn agent_builder<A2>(self, agents: A2) -> ProxyBuilder<A2, R, S> {
        ProxyBuilder {
            binder: self.binder.with_agent_builder(agents),
            options: self.options,
            env: self.env,
        }
    }

    /// Use a custom request-handler builder.
    pub fn handler_builder<R2>(self, handlers: R2) -> ProxyBuilder<A, R2, S> {
        ProxyBuilder {
            binder: self.binder.with_handler_builder(handlers),
            options: self.options,
            env: self.env,
        }
    }

    /// Send log lines to a custom sink.
    pub fn sink<S2>(self, sink: S2) -> ProxyBuilder<A, R, S2> {
        ProxyBuilder {
            binder: self.binder.with_sink(sink),
            options: self.options,
            env: self.env,
        }
    }

    pub(crate) fn resolve_env(&self) -> ProxyEnv {
        self.env.clone().unwrap_or_else(ProxyEnv::from_process)
    }
}
