//! Core `ProxyBinder` and the `add_proxy_to_client` entry points
//!
//! A bind is a single pass: select, log, build agent(s), build handler,
//! assign. Nothing is retried and collaborator errors are returned as they
//! came.

use crate::client::ClientWithConfig;
use crate::config::{AddProxyOptions, ProxyEnv};
use crate::error::{self, AddProxyError};
use crate::handler::{HandlerConfig, HttpHandler, HttpHandlerBuilder, RequestHandlerBuilder};
use crate::proxy::{
    DefaultAgentBuilder, MIXED_PROXY_WARNING, ProxyAgentBuilder, ProxySelection, select_proxy,
};
use crate::telemetry::{LogSink, TracingSink};

/// Debug line written before failing with `NoProxyConfigured`.
pub const NO_PROXY_DEBUG_LINE: &str =
    "No proxy found in options or environment, and throw_on_no_proxy is set to true, returning an error";

/// Couples the agent builder, handler builder and log sink used to bind
/// proxies onto clients.
#[derive(Debug, Clone, Default)]
pub struct ProxyBinder<A = DefaultAgentBuilder, R = HttpHandlerBuilder, S = TracingSink> {
    agents: A,
    handlers: R,
    sink: S,
}

impl ProxyBinder {
    /// Binder using [`DefaultAgentBuilder`], [`HttpHandlerBuilder`] and
    /// [`TracingSink`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A, R, S> ProxyBinder<A, R, S> {
    /// Binder from explicit collaborators.
    pub fn from_parts(agents: A, handlers: R, sink: S) -> Self {
        Self {
            agents,
            handlers,
            sink,
        }
    }

    pub fn with_agent_builder<A2>(self, agents: A2) -> ProxyBinder<A2, R, S> {
        ProxyBinder {
            agents,
            handlers: self.handlers,
            sink: self.sink,
        }
    }

    pub fn with_handler_builder<R2>(self, handlers: R2) -> ProxyBinder<A, R2, S> {
        ProxyBinder {
            agents: self.agents,
            handlers,
            sink: self.sink,
        }
    }

    pub fn with_sink<S2>(self, sink: S2) -> ProxyBinder<A, R, S2> {
        ProxyBinder {
            agents: self.agents,
            handlers: self.handlers,
            sink,
        }
    }

    pub fn agent_builder(&self) -> &A {
        &self.agents
    }

    pub fn handler_builder(&self) -> &R {
        &self.handlers
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<A, R, S> ProxyBinder<A, R, S>
where
    A: ProxyAgentBuilder,
    R: RequestHandlerBuilder<A::Agent>,
    S: LogSink,
{
    /// Select a proxy from `options` and `env` and install a request handler
    /// built from it on `client`.
    ///
    /// Returns `client` itself. When no proxy resolves and
    /// `throw_on_no_proxy` is off, `client` is returned untouched.
    ///
    /// # Errors
    ///
    /// [`AddProxyError::NoProxyConfigured`] when no proxy resolves and
    /// `throw_on_no_proxy` is on; [`AddProxyError::Agent`] or
    /// [`AddProxyError::Handler`] when a collaborator fails. The client is
    /// left unchanged on every error path.
    pub fn bind<'c, C>(
        &self,
        client: &'c mut C,
        options: &AddProxyOptions,
        env: &ProxyEnv,
    ) -> Result<&'c mut C, AddProxyError<A::Error, R::Error>>
    where
        C: ClientWithConfig<RequestHandler = R::Handler>,
    {
        let selection = select_proxy(options, env);

        if selection.warns() {
            self.sink.warn(MIXED_PROXY_WARNING);
        }
        if options.debug {
            if let Some(line) = selection.describe() {
                self.sink.info(&line);
            }
        }

        let (http_agent, https_agent) = match selection {
            ProxySelection::Mixed { http, https } => {
                let http_agent = self.build_agent(http, options)?;
                let https_agent = self.build_agent(https, options)?;
                (http_agent, https_agent)
            }
            ProxySelection::Shared { url, .. } => {
                let agent = self.build_agent(url, options)?;
                (agent.clone(), agent)
            }
            ProxySelection::Unresolved => {
                if !options.throw_on_no_proxy {
                    return Ok(client);
                }
                if options.debug {
                    self.sink.info(NO_PROXY_DEBUG_LINE);
                }
                return Err(AddProxyError::NoProxyConfigured);
            }
        };

        let handler = self
            .handlers
            .build_handler(HandlerConfig {
                http_agent,
                https_agent,
                connection_timeout: options.connection_timeout,
                socket_timeout: options.socket_timeout,
                handler_options: options.handler_options.clone(),
            })
            .map_err(AddProxyError::<A::Error, R::Error>::Handler)?;

        client.set_request_handler(handler);
        Ok(client)
    }

    fn build_agent(
        &self,
        url: &str,
        options: &AddProxyOptions,
    ) -> Result<A::Agent, AddProxyError<A::Error, R::Error>> {
        self.agents
            .build_agent(url, &options.agent_options)
            .map_err(AddProxyError::Agent)
    }
}

/// Bind a proxy onto `client` using the process environment and the default
/// collaborators.
///
/// # Errors
///
/// See [`ProxyBinder::bind`].
pub fn add_proxy_to_client<'c, C>(
    client: &'c mut C,
    options: &AddProxyOptions,
) -> error::Result<&'c mut C>
where
    C: ClientWithConfig<RequestHandler = HttpHandler>,
{
    add_proxy_to_client_with_env(client, options, &ProxyEnv::from_process())
}

/// Like [`add_proxy_to_client`] with an explicit environment snapshot.
///
/// # Errors
///
/// See [`ProxyBinder::bind`].
pub fn add_proxy_to_client_with_env<'c, C>(
    client: &'c mut C,
    options: &AddProxyOptions,
    env: &ProxyEnv,
) -> error::Result<&'c mut C>
where
    C: ClientWithConfig<RequestHandler = HttpHandler>,
{
    ProxyBinder::new().bind(client, options, env)
}
