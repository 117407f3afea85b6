//! sdkproxy public API
//!
//! Attach an HTTP/HTTPS proxy to an SDK-style client, picked from explicit
//! options or the `http_proxy`/`https_proxy` environment variables.
//!
//! ```rust
//! use sdkproxy::{ClientWithConfig, ProxyEnv, SdkClient, SdkProxy};
//!
//! let mut client: SdkClient = SdkClient::new();
//! SdkProxy::builder()
//!     .https_only(true)
//!     .env(ProxyEnv::from_pairs([
//!         ("HTTP_PROXY", "http://proxy.internal:3128"),
//!         ("HTTPS_PROXY", "https://proxy.internal:8443"),
//!     ]))
//!     .bind(&mut client)
//!     .expect("proxy is configured");
//!
//! let handler = client.request_handler().expect("handler installed");
//! assert_eq!(handler.http_agent().port(), Some(8443));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::ProxyBuilder;

// Re-export important types from client package
pub use sdkproxy_client::{
    AddProxyError, AddProxyOptions, AgentOptions, ClientWithConfig, DefaultAgentBuilder,
    HandlerConfig, HttpHandler, HttpHandlerBuilder, LogSink, ProxyAgent, ProxyAgentBuilder,
    ProxyBinder, ProxyEnv, RecordingSink, RequestHandlerBuilder, SdkClient, SdkClientConfig,
    TracingSink, Url,
};
pub use sdkproxy_client::error::{Error, Result};

/// Main entry point providing static builder methods
pub struct SdkProxy;

impl SdkProxy {
    /// Create a new builder with default options.
    ///
    /// Shorthand for `ProxyBuilder::new()`
    #[must_use]
    pub fn builder() -> ProxyBuilder {
        ProxyBuilder::new()
    }

    /// Create a builder starting from `options`.
    #[must_use]
    pub fn with_options(options: AddProxyOptions) -> ProxyBuilder {
        ProxyBuilder::new().options(options)
    }
}

/// Attach a proxy to `client` from the process environment and `options`.
///
/// # Errors
///
/// `NoProxyConfigured` when no proxy resolves and `throw_on_no_proxy` is on;
/// a URL parse error when a resolved proxy URL is malformed.
pub fn add_proxy_to_client<'c, C>(client: &'c mut C, options: &AddProxyOptions) -> Result<&'c mut C>
where
    C: ClientWithConfig<RequestHandler = HttpHandler>,
{
    sdkproxy_client::add_proxy_to_client(client, options)
}
