//! Option setters for `ProxyBuilder`

use std::time::Duration;

use serde_json::Value;

use sdkproxy_client::config::{AddProxyOptions, ProxyEnv};
use sdkproxy_client::proxy::AgentOptions;

use super::core::ProxyBuilder;

impl<A, R, S> ProxyBuilder<A, R, S> {
    /// Replace all options at once.
    #[must_use]
    pub fn options(mut self, options: AddProxyOptions) -> Self {
        self.options = options;
        self
    }

    /// Log the chosen proxy through the sink.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.options.debug = debug;
        self
    }

    /// Route both slots through the HTTPS proxy when both are found.
    #[must_use]
    pub fn https_only(mut self, https_only: bool) -> Self {
        self.options.https_only = https_only;
        self
    }

    /// Whether a missing proxy is an error.
    #[must_use]
    pub fn throw_on_no_proxy(mut self, throw_on_no_proxy: bool) -> Self {
        self.options.throw_on_no_proxy = throw_on_no_proxy;
        self
    }

    #[must_use]
    pub fn http_proxy<U: Into<String>>(mut self, url: U) -> Self {
        self.options.http_proxy = Some(url.into());
        self
    }

    #[must_use]
    pub fn https_proxy<U: Into<String>>(mut self, url: U) -> Self {
        self.options.https_proxy = Some(url.into());
        self
    }

    #[must_use]
    pub fn agent_options(mut self, agent_options: AgentOptions) -> Self {
        self.options.agent_options = agent_options;
        self
    }

    #[must_use]
    pub fn agent_option<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.options.agent_options.insert(key, value);
        self
    }

    #[must_use]
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.with_connection_timeout(timeout);
        self
    }

    #[must_use]
    pub fn socket_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.with_socket_timeout(timeout);
        self
    }

    /// Pass an extra option through to the request-handler builder.
    #[must_use]
    pub fn handler_option<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.options.handler_options.insert(key.into(), value.into());
        self
    }

    /// Bind against `env` instead of the process environment.
    #[must_use]
    pub fn env(mut self, env: ProxyEnv) -> Self {
        self.env = Some(env);
        self
    }
}
