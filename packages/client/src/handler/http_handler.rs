//! Default request handler carrying one proxy agent per scheme

use std::convert::Infallible;
use std::time::Duration;

use http::Uri;
use serde_json::{Map, Value};

use super::{HandlerConfig, RequestHandlerBuilder};
use crate::proxy::ProxyAgent;

/// Request handler that routes requests to a proxy agent by scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpHandler {
    http_agent: ProxyAgent,
    https_agent: ProxyAgent,
    connection_timeout: Option<Duration>,
    socket_timeout: Option<Duration>,
    options: Map<String, Value>,
}

impl HttpHandler {
    #[must_use]
    pub fn http_agent(&self) -> &ProxyAgent {
        &self.http_agent
    }

    #[must_use]
    pub fn https_agent(&self) -> &ProxyAgent {
        &self.https_agent
    }

    #[must_use]
    pub fn connection_timeout(&self) -> Option<Duration> {
        self.connection_timeout
    }

    #[must_use]
    pub fn socket_timeout(&self) -> Option<Duration> {
        self.socket_timeout
    }

    /// Pass-through handler options.
    #[must_use]
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// Agent for a request scheme. `http`/`ws` use the HTTP slot,
    /// `https`/`wss` the HTTPS slot; other schemes aren't proxied.
    #[must_use]
    pub fn proxy_for_scheme(&self, scheme: &str) -> Option<&ProxyAgent> {
        if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("ws") {
            Some(&self.http_agent)
        } else if scheme.eq_ignore_ascii_case("https") || scheme.eq_ignore_ascii_case("wss") {
            Some(&self.https_agent)
        } else {
            None
        }
    }

    /// Agent for a request URI; `None` for relative URIs and unknown schemes.
    #[must_use]
    pub fn proxy_for(&self, uri: &Uri) -> Option<&ProxyAgent> {
        uri.scheme_str().and_then(|scheme| self.proxy_for_scheme(scheme))
    }

    /// Whether both slots share the same proxy endpoint.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.http_agent.url() == self.https_agent.url()
    }
}

/// Builds [`HttpHandler`] values. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpHandlerBuilder;

impl RequestHandlerBuilder<ProxyAgent> for HttpHandlerBuilder {
    type Handler = HttpHandler;
    type Error = Infallible;

    fn build_handler(&self, config: HandlerConfig<ProxyAgent>) -> Result<HttpHandler, Infallible> {
        let connection_timeout = config.connection_timeout_duration();
        let socket_timeout = config.socket_timeout_duration();
        Ok(HttpHandler {
            http_agent: config.http_agent,
            https_agent: config.https_agent,
            connection_timeout,
            socket_timeout,
            options: config.handler_options,
        })
    }
}
