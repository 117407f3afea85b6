//! Request-handler collaborator
//!
//! The binder hands the agents and timeouts to a [`RequestHandlerBuilder`]
//! and stores whatever it returns on the client.

pub mod http_handler;

use std::time::Duration;

use serde_json::{Map, Value};

pub use http_handler::{HttpHandler, HttpHandlerBuilder};

/// Everything a request handler is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerConfig<A> {
    /// Agent used for plain HTTP requests.
    pub http_agent: A,
    /// Agent used for HTTPS requests.
    pub https_agent: A,
    /// Connection timeout in milliseconds, as supplied by the caller.
    pub connection_timeout: Option<u64>,
    /// Socket timeout in milliseconds, as supplied by the caller.
    pub socket_timeout: Option<u64>,
    /// Remaining caller options, untouched.
    pub handler_options: Map<String, Value>,
}

impl<A> HandlerConfig<A> {
    #[must_use]
    pub fn connection_timeout_duration(&self) -> Option<Duration> {
        self.connection_timeout.map(Duration::from_millis)
    }

    #[must_use]
    pub fn socket_timeout_duration(&self) -> Option<Duration> {
        self.socket_timeout.map(Duration::from_millis)
    }
}

/// Builds the request handler assigned to a client.
pub trait RequestHandlerBuilder<A> {
    /// The handler stored in the client's request-handler slot.
    type Handler;
    /// Failure reported while building the handler.
    type Error;

    fn build_handler(&self, config: HandlerConfig<A>) -> Result<Self::Handler, Self::Error>;
}

impl<A, T: RequestHandlerBuilder<A> + ?Sized> RequestHandlerBuilder<A> for &T {
    type Handler = T::Handler;
    type Error = T::Error;

    fn build_handler(&self, config: HandlerConfig<A>) -> Result<Self::Handler, Self::Error> {
        (**self).build_handler(config)
    }
}
