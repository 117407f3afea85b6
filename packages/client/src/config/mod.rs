//! Configuration inputs: caller options and the environment snapshot

pub mod defaults;
pub mod env;
pub mod options;

pub use env::{
    HTTPS_PROXY_VARS, HTTP_PROXY_VARS, ProxyEnv, http_proxy_from_env, https_proxy_from_env,
};
pub use options::AddProxyOptions;
