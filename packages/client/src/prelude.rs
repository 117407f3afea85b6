//! sdkproxy prelude
//!
//! The types needed to bind a proxy onto a client.

pub use crate::binder::{ProxyBinder, add_proxy_to_client, add_proxy_to_client_with_env};
pub use crate::client::{ClientWithConfig, SdkClient, SdkClientConfig};
pub use crate::config::{AddProxyOptions, ProxyEnv, http_proxy_from_env, https_proxy_from_env};
pub use crate::error::{AddProxyError, Error, Result};
pub use crate::handler::{HandlerConfig, HttpHandler, HttpHandlerBuilder, RequestHandlerBuilder};
pub use crate::proxy::{
    AgentOptions, DefaultAgentBuilder, ProxyAgent, ProxyAgentBuilder, ProxySelection, ProxySource,
    select_proxy,
};
pub use crate::telemetry::{LogSink, RecordingSink, TracingSink};
