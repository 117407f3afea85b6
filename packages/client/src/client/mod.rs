//! The client side of the binding: anything with a request-handler slot

pub mod core;

pub use self::core::{SdkClient, SdkClientConfig};

/// A client whose configuration exposes a mutable request-handler slot.
///
/// Implement this for an SDK client type to let the binder replace its
/// request handler in place.
pub trait ClientWithConfig {
    /// Handler type stored in the slot.
    type RequestHandler;

    /// Replace the request handler.
    fn set_request_handler(&mut self, handler: Self::RequestHandler);

    /// Currently configured request handler, if any.
    fn request_handler(&self) -> Option<&Self::RequestHandler>;
}
