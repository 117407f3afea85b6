//! Opaque pass-through options for the proxy-agent builder

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options forwarded verbatim to a [`ProxyAgentBuilder`](super::ProxyAgentBuilder).
///
/// The map is never inspected by the selection logic. Keys follow whatever
/// convention the agent implementation expects (`keepAlive`, `maxSockets`,
/// `proxyRequestOptions`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentOptions(Map<String, Value>);

impl AgentOptions {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, returning the previous value for `key`.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// A `proxy` string entry, which replaces the resolved proxy URL for
    /// agents that honour it.
    #[must_use]
    pub fn proxy_override(&self) -> Option<&str> {
        self.0.get("proxy").and_then(Value::as_str)
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for AgentOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AgentOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
