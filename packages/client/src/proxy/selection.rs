//! Proxy resolution and selection policy
//!
//! Resolution picks at most one URL per scheme from explicit options, then
//! the lowercase variable, then the uppercase one. Selection then decides
//! which URL feeds each transport slot:
//!
//! 1. both resolved: `https_only` shares the HTTPS URL, otherwise each slot
//!    gets its own scheme's URL (mixed);
//! 2. only HTTP resolved and not `https_only`: HTTP URL shared by both slots;
//! 3. HTTPS resolved: HTTPS URL shared by both slots;
//! 4. nothing usable.

use std::fmt;

use crate::config::env::non_empty;
use crate::config::{AddProxyOptions, ProxyEnv};

/// Warning emitted when both proxies are found and `https_only` is off.
pub const MIXED_PROXY_WARNING: &str = "Both HTTP and HTTPS proxies found, the HTTP proxy takes precedence for HTTP traffic\n\
     To use the HTTPS proxy for all traffic, set the `https_only` option to `true`";

/// Scheme a resolved proxy URL was looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxySource {
    Http,
    Https,
}

impl ProxySource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProxySource::Http => "http",
            ProxySource::Https => "https",
        }
    }
}

impl fmt::Display for ProxySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxySelection<'a> {
    /// Separate agents: `http` for the HTTP slot, `https` for the HTTPS slot.
    Mixed { http: &'a str, https: &'a str },
    /// One agent built from `url` and used for both slots.
    Shared { url: &'a str, source: ProxySource },
    /// No usable proxy was resolved.
    Unresolved,
}

impl ProxySelection<'_> {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ProxySelection::Unresolved)
    }

    /// Whether this selection should be accompanied by [`MIXED_PROXY_WARNING`].
    #[must_use]
    pub fn warns(&self) -> bool {
        matches!(self, ProxySelection::Mixed { .. })
    }

    /// Human readable line describing the chosen proxy, if any.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        match self {
            ProxySelection::Mixed { http, https } => Some(format!(
                "Setting http proxy to {http} and https proxy to {https}"
            )),
            ProxySelection::Shared { url, source } => {
                Some(format!("Setting {source} proxy to {url}"))
            }
            ProxySelection::Unresolved => None,
        }
    }
}

/// HTTP proxy URL from `options.http_proxy`, `http_proxy` or `HTTP_PROXY`.
#[must_use]
pub fn resolve_http_proxy<'a>(options: &'a AddProxyOptions, env: &'a ProxyEnv) -> Option<&'a str> {
    non_empty(options.http_proxy.as_deref()).or_else(|| env.http_proxy())
}

/// HTTPS proxy URL from `options.https_proxy`, `https_proxy` or `HTTPS_PROXY`.
#[must_use]
pub fn resolve_https_proxy<'a>(
    options: &'a AddProxyOptions,
    env: &'a ProxyEnv,
) -> Option<&'a str> {
    non_empty(options.https_proxy.as_deref()).or_else(|| env.https_proxy())
}

/// Apply the selection policy to `options` and `env`.
#[must_use]
pub fn select_proxy<'a>(options: &'a AddProxyOptions, env: &'a ProxyEnv) -> ProxySelection<'a> {
    let http = resolve_http_proxy(options, env);
    let https = resolve_https_proxy(options, env);

    match (http, https) {
        (Some(_), Some(https)) if options.https_only => ProxySelection::Shared {
            url: https,
            source: ProxySource::Https,
        },
        (Some(http), Some(https)) => ProxySelection::Mixed { http, https },
        (Some(http), None) if !options.https_only => ProxySelection::Shared {
            url: http,
            source: ProxySource::Http,
        },
        (_, Some(https)) => ProxySelection::Shared {
            url: https,
            source: ProxySource::Https,
        },
        _ => ProxySelection::Unresolved,
    }
}
