//! Minimal SDK-style client carrying a request-handler slot

use super::ClientWithConfig;
use crate::handler::HttpHandler;

/// Configuration of an [`SdkClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct SdkClientConfig<H> {
    /// Region the client talks to, if any.
    pub region: Option<String>,
    /// Handler used to send requests. `None` means the transport default.
    pub request_handler: Option<H>,
}

impl<H> Default for SdkClientConfig<H> {
    fn default() -> Self {
        Self {
            region: None,
            request_handler: None,
        }
    }
}

/// Client with a public `config.request_handler` slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SdkClient<H = HttpHandler> {
    pub config: SdkClientConfig<H>,
}

impl<H> SdkClient<H> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_region<S: Into<String>>(mut self, region: S) -> Self {
        self.config.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_request_handler(mut self, handler: H) -> Self {
        self.config.request_handler = Some(handler);
        self
    }
}

impl<H> Default for SdkClient<H> {
    fn default() -> Self {
        Self {
            config: SdkClientConfig::default(),
        }
    }
}

impl<H> ClientWithConfig for SdkClient<H> {
    type RequestHandler = H;

    fn set_request_handler(&mut self, handler: H) {
        self.config.request_handler = Some(handler);
    }

    fn request_handler(&self) -> Option<&H> {
        self.config.request_handler.as_ref()
    }
}
