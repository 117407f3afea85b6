//! Default values for `AddProxyOptions`

use serde_json::Map;

use super::options::AddProxyOptions;
use crate::proxy::AgentOptions;

impl Default for AddProxyOptions {
    fn default() -> Self {
        Self {
            debug: false,
            https_only: false,
            throw_on_no_proxy: true,
            http_proxy: None,
            https_proxy: None,
            agent_options: AgentOptions::default(),
            connection_timeout: None,
            socket_timeout: None,
            handler_options: Map::new(),
        }
    }
}
