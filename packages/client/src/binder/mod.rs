//! Binding a proxy-aware request handler onto a client

pub mod core;

pub use self::core::{NO_PROXY_DEBUG_LINE, ProxyBinder, add_proxy_to_client, add_proxy_to_client_with_env};
