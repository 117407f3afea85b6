//! # sdkproxy client
//!
//! Selects an HTTP/HTTPS proxy from explicit options or the process
//! environment and installs a proxy-aware request handler on an SDK-style
//! client.
//!
//! ## Features
//!
//! - **Ordered resolution**: explicit option, then `http_proxy`/`https_proxy`,
//!   then `HTTP_PROXY`/`HTTPS_PROXY`
//! - **`https_only`** to route both slots through the HTTPS proxy
//! - **Pluggable collaborators** for proxy agents, request handlers and log output
//! - **JSON options** using the familiar camelCase keys
//!
//! ## Usage
//!
//! ```rust
//! use sdkproxy_client::prelude::*;
//!
//! let env = ProxyEnv::from_pairs([("HTTPS_PROXY", "https://proxy.internal:8443")]);
//! let mut client: SdkClient = SdkClient::new().with_region("us-east-1");
//!
//! add_proxy_to_client_with_env(&mut client, &AddProxyOptions::default(), &env)
//!     .expect("proxy is configured");
//!
//! let handler = client.request_handler().expect("handler installed");
//! assert_eq!(handler.https_agent().host(), Some("proxy.internal"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod binder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod proxy;
pub mod telemetry;

pub mod prelude;

pub use crate::prelude::*;

pub use url::Url;
