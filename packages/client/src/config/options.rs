//! Options accepted by `add_proxy_to_client`
//!
//! Every field is independently optional. The serde representation uses the
//! camelCase keys SDK users already know (`httpsOnly`, `throwOnNoProxy`, ...),
//! and any key that isn't recognised is kept in `handler_options` so it can be
//! forwarded to the request-handler builder untouched.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::proxy::AgentOptions;

/// Set of options that can be passed to `add_proxy_to_client`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddProxyOptions {
    /// Toggles informational logging.
    ///
    /// Defaults to `false`.
    pub debug: bool,
    /// Use the HTTPS proxy for both transport slots when both an HTTP and an
    /// HTTPS proxy are found.
    ///
    /// Defaults to `false`.
    pub https_only: bool,
    /// Fail with `NoProxyConfigured` if no proxy is found.
    ///
    /// Defaults to `true`.
    #[serde(alias = "noProxyException")]
    pub throw_on_no_proxy: bool,
    /// Explicit HTTP proxy URL, takes precedence over `http_proxy`/`HTTP_PROXY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,
    /// Explicit HTTPS proxy URL, takes precedence over `https_proxy`/`HTTPS_PROXY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_proxy: Option<String>,
    /// Forwarded verbatim to the proxy-agent builder.
    #[serde(skip_serializing_if = "AgentOptions::is_empty")]
    pub agent_options: AgentOptions,
    /// Connection timeout in milliseconds, forwarded to the handler builder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_timeout: Option<u64>,
    /// Socket timeout in milliseconds, forwarded to the handler builder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_timeout: Option<u64>,
    /// Any other handler option, forwarded verbatim to the handler builder.
    #[serde(flatten)]
    pub handler_options: Map<String, Value>,
}

impl AddProxyOptions {
    /// Options with all defaults applied.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document.
    ///
    /// Missing keys take their defaults; `noProxyException` is accepted as a
    /// legacy spelling of `throwOnNoProxy`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse options from an already decoded JSON value.
    pub fn from_json_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_https_only(mut self, https_only: bool) -> Self {
        self.https_only = https_only;
        self
    }

    #[must_use]
    pub fn with_throw_on_no_proxy(mut self, throw_on_no_proxy: bool) -> Self {
        self.throw_on_no_proxy = throw_on_no_proxy;
        self
    }

    #[must_use]
    pub fn with_http_proxy<S: Into<String>>(mut self, url: S) -> Self {
        self.http_proxy = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_https_proxy<S: Into<String>>(mut self, url: S) -> Self {
        self.https_proxy = Some(url.into());
        self
    }

    /// Replace the agent options wholesale.
    #[must_use]
    pub fn with_agent_options(mut self, agent_options: AgentOptions) -> Self {
        self.agent_options = agent_options;
        self
    }

    /// Add a single agent option, overwriting any previous value for `key`.
    #[must_use]
    pub fn with_agent_option<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.agent_options.insert(key, value);
        self
    }

    /// Set the connection timeout.
    ///
    /// Stored with millisecond precision; sub-millisecond parts are dropped.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = Some(duration_to_millis(timeout));
        self
    }

    /// Set the socket timeout.
    ///
    /// Stored with millisecond precision; sub-millisecond parts are dropped.
    #[must_use]
    pub fn with_socket_timeout(mut self, timeout: Duration) -> Self {
        self.socket_timeout = Some(duration_to_millis(timeout));
        self
    }

    /// Add a pass-through option for the request-handler builder.
    #[must_use]
    pub fn with_handler_option<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.handler_options.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn connection_timeout_duration(&self) -> Option<Duration> {
        self.connection_timeout.map(Duration::from_millis)
    }

    #[must_use]
    pub fn socket_timeout_duration(&self) -> Option<Duration> {
        self.socket_timeout.map(Duration::from_millis)
    }
}

fn duration_to_millis(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}
