use std::convert::Infallible;

use thiserror::Error;

/// Message carried by [`AddProxyError::NoProxyConfigured`].
pub const NO_PROXY_MESSAGE: &str =
    "Unable to add proxy to SDK client. No proxy found in options or environment";

/// Errors returned when binding a proxy onto a client.
///
/// `A` and `H` are the error types of the agent and request-handler
/// collaborators. Their errors are carried as-is so callers can recover the
/// original value with [`AddProxyError::into_agent_error`] or
/// [`AddProxyError::into_handler_error`].
#[derive(Debug, Error)]
pub enum AddProxyError<A, H> {
    /// No proxy URL was resolved from options or environment while
    /// `throw_on_no_proxy` was enabled.
    #[error("{}", NO_PROXY_MESSAGE)]
    NoProxyConfigured,
    /// The proxy-agent builder failed.
    #[error(transparent)]
    Agent(A),
    /// The request-handler builder failed.
    #[error(transparent)]
    Handler(H),
}

impl<A, H> AddProxyError<A, H> {
    #[must_use]
    pub fn is_no_proxy(&self) -> bool {
        matches!(self, AddProxyError::NoProxyConfigured)
    }

    #[must_use]
    pub fn is_agent(&self) -> bool {
        matches!(self, AddProxyError::Agent(_))
    }

    #[must_use]
    pub fn is_handler(&self) -> bool {
        matches!(self, AddProxyError::Handler(_))
    }

    /// Returns the agent builder's error, if that is what failed.
    pub fn into_agent_error(self) -> Option<A> {
        match self {
            AddProxyError::Agent(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the handler builder's error, if that is what failed.
    pub fn into_handler_error(self) -> Option<H> {
        match self {
            AddProxyError::Handler(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type produced by the default collaborators.
pub type Error = AddProxyError<url::ParseError, Infallible>;

/// A Result alias where the Err case is the default collaborators' [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
