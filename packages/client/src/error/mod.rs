//! Error types for proxy binding

pub mod types;

pub use types::{AddProxyError, Error, NO_PROXY_MESSAGE, Result};
