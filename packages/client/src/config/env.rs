//! Environment variable snapshot for proxy resolution
//!
//! Only the four proxy variables are captured. Within a scheme the lowercase
//! spelling is checked before the uppercase one, and empty values count as
//! unset.

use std::collections::HashMap;
use std::env;

/// Candidate variables for the HTTP proxy, in priority order.
pub const HTTP_PROXY_VARS: [&str; 2] = ["http_proxy", "HTTP_PROXY"];

/// Candidate variables for the HTTPS proxy, in priority order.
pub const HTTPS_PROXY_VARS: [&str; 2] = ["https_proxy", "HTTPS_PROXY"];

/// Immutable snapshot of the proxy-related environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyEnv {
    vars: HashMap<String, String>,
}

impl ProxyEnv {
    /// A snapshot with no proxy variables set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture the proxy variables of the current process.
    ///
    /// Values that aren't valid unicode are treated as unset.
    #[must_use]
    pub fn from_process() -> Self {
        let vars = HTTP_PROXY_VARS
            .iter()
            .chain(HTTPS_PROXY_VARS.iter())
            .filter_map(|key| env::var(key).ok().map(|value| ((*key).to_string(), value)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from arbitrary key/value pairs.
    ///
    /// Keys other than the four proxy variables are ignored. When a key
    /// repeats the last value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .filter(|(key, _)| is_proxy_var(key))
            .collect();
        Self { vars }
    }

    /// Raw value of `key`, empty values included.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// First non-empty value among `http_proxy`, `HTTP_PROXY`.
    #[must_use]
    pub fn http_proxy(&self) -> Option<&str> {
        self.first_set(&HTTP_PROXY_VARS)
    }

    /// First non-empty value among `https_proxy`, `HTTPS_PROXY`.
    #[must_use]
    pub fn https_proxy(&self) -> Option<&str> {
        self.first_set(&HTTPS_PROXY_VARS)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.http_proxy().is_none() && self.https_proxy().is_none()
    }

    fn first_set(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| non_empty(self.get(key)))
    }
}

/// HTTP proxy from the process environment.
#[must_use]
pub fn http_proxy_from_env() -> Option<String> {
    ProxyEnv::from_process().http_proxy().map(str::to_owned)
}

/// HTTPS proxy from the process environment.
#[must_use]
pub fn https_proxy_from_env() -> Option<String> {
    ProxyEnv::from_process().https_proxy().map(str::to_owned)
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn is_proxy_var(key: &str) -> bool {
    HTTP_PROXY_VARS
        .iter()
        .chain(HTTPS_PROXY_VARS.iter())
        .any(|var| *var == key)
}
