//! Proxy resolution, selection and agent construction

pub mod agent;
pub mod agent_options;
pub mod selection;
pub mod url_handling;

pub use agent::{DefaultAgentBuilder, ProxyAgent, ProxyAgentBuilder};
pub use agent_options::AgentOptions;
pub use selection::{
    MIXED_PROXY_WARNING, ProxySelection, ProxySource, resolve_http_proxy, resolve_https_proxy,
    select_proxy,
};
pub use url_handling::{basic_auth_from_url, encode_basic_auth};
