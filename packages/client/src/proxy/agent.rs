//! Proxy-agent collaborator
//!
//! A proxy agent describes how outbound connections reach a proxy. The
//! binder only needs to create agents and hand them to the request-handler
//! builder, so the trait is all it depends on. [`DefaultAgentBuilder`]
//! produces a plain [`ProxyAgent`] description for transports that take the
//! proxy as data.

use std::fmt;

use http::header::HeaderValue;

use super::agent_options::AgentOptions;
use super::url_handling::{basic_auth_from_url, strip_credentials};
use crate::Url;

/// Builds a proxy agent for a proxy URL.
///
/// Errors are returned to the caller of the binder unchanged.
pub trait ProxyAgentBuilder {
    /// The agent handed to the request-handler builder.
    type Agent: Clone;
    /// Failure reported while building an agent.
    type Error;

    fn build_agent(
        &self,
        proxy_url: &str,
        options: &AgentOptions,
    ) -> Result<Self::Agent, Self::Error>;
}

impl<T: ProxyAgentBuilder + ?Sized> ProxyAgentBuilder for &T {
    type Agent = T::Agent;
    type Error = T::Error;

    fn build_agent(
        &self,
        proxy_url: &str,
        options: &AgentOptions,
    ) -> Result<Self::Agent, Self::Error> {
        (**self).build_agent(proxy_url, options)
    }
}

/// Parsed proxy endpoint together with the options it was built with.
#[derive(Clone, PartialEq)]
pub struct ProxyAgent {
    url: Url,
    auth: Option<HeaderValue>,
    options: AgentOptions,
}

impl ProxyAgent {
    /// Parse `proxy_url` into an agent.
    ///
    /// Credentials in the URL userinfo move into a `Proxy-Authorization`
    /// header and are removed from [`ProxyAgent::url`].
    pub fn parse(proxy_url: &str, options: AgentOptions) -> Result<Self, url::ParseError> {
        let mut url = Url::parse(proxy_url)?;
        let auth = basic_auth_from_url(&url);
        if auth.is_some() {
            strip_credentials(&mut url);
        }
        Ok(Self { url, auth, options })
    }

    /// Proxy URL without credentials.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    /// Explicit port, or the scheme's default.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.url.port_or_known_default()
    }

    #[must_use]
    pub fn is_https(&self) -> bool {
        self.url.scheme() == "https"
    }

    /// `Proxy-Authorization` header derived from the URL userinfo.
    #[must_use]
    pub fn auth(&self) -> Option<&HeaderValue> {
        self.auth.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> &AgentOptions {
        &self.options
    }
}

impl fmt::Debug for ProxyAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyAgent")
            .field("url", &self.url.as_str())
            .field("auth", &self.auth.as_ref().map(|_| "<redacted>"))
            .field("options", &self.options)
            .finish()
    }
}

/// Builds [`ProxyAgent`] values by parsing the proxy URL.
///
/// A `proxy` string in the agent options replaces the resolved URL, so
/// callers can pin an agent to a specific endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAgentBuilder;

impl ProxyAgentBuilder for DefaultAgentBuilder {
    type Agent = ProxyAgent;
    type Error = url::ParseError;

    fn build_agent(
        &self,
        proxy_url: &str,
        options: &AgentOptions,
    ) -> Result<ProxyAgent, url::ParseError> {
        let target = options.proxy_override().unwrap_or(proxy_url);
        ProxyAgent::parse(target, options.clone())
    }
}
