//! Terminal methods for `ProxyBuilder`

use sdkproxy_client::client::ClientWithConfig;
use sdkproxy_client::error::AddProxyError;
use sdkproxy_client::handler::RequestHandlerBuilder;
use sdkproxy_client::proxy::{ProxyAgentBuilder, resolve_http_proxy, resolve_https_proxy};
use sdkproxy_client::telemetry::LogSink;

use super::core::ProxyBuilder;

impl<A, R, S> ProxyBuilder<A, R, S>
where
    A: ProxyAgentBuilder,
    R: RequestHandlerBuilder<A::Agent>,
    S: LogSink,
{
    /// Install a proxy-aware request handler on `client`.
    ///
    /// # Errors
    ///
    /// `NoProxyConfigured` when nothing resolves and `throw_on_no_proxy` is
    /// on, or the collaborator's own error when building an agent or handler
    /// fails.
    pub fn bind<'c, C>(
        &self,
        client: &'c mut C,
    ) -> Result<&'c mut C, AddProxyError<A::Error, R::Error>>
    where
        C: ClientWithConfig<RequestHandler = R::Handler>,
    {
        let env = self.resolve_env();
        self.binder.bind(client, &self.options, &env)
    }
}

impl<A, R, S> ProxyBuilder<A, R, S> {
    /// HTTP and HTTPS proxy URLs the builder would resolve right now.
    #[must_use]
    pub fn resolved_proxies(&self) -> (Option<String>, Option<String>) {
        let env = self.resolve_env();
        (
            resolve_http_proxy(&self.options, &env).map(str::to_owned),
            resolve_https_proxy(&self.options, &env).map(str::to_owned),
        )
    }
}
