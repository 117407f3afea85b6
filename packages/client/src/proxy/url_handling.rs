//! URL handling and authentication utilities for proxy agents

use base64::Engine;
use http::header::HeaderValue;

use crate::Url;
use crate::telemetry::LOG_TARGET;

/// Encode basic authentication credentials into a `Proxy-Authorization` value.
#[must_use]
pub fn encode_basic_auth(username: &str, password: &str) -> HeaderValue {
    let credentials = format!("{username}:{password}");
    let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
    // base64 output is always a valid header value
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
        .unwrap_or_else(|_| HeaderValue::from_static(""));
    value.set_sensitive(true);
    value
}

/// Basic auth header from the userinfo of `url`, if it carries a username.
///
/// Userinfo is percent-decoded first; components that don't decode to UTF-8
/// are used as written.
#[must_use]
pub fn basic_auth_from_url(url: &Url) -> Option<HeaderValue> {
    if url.username().is_empty() {
        return None;
    }
    let username = decode_userinfo(url.username());
    let password = url.password().map(decode_userinfo).unwrap_or_default();
    Some(encode_basic_auth(&username, &password))
}

/// Remove username and password from `url`.
pub(crate) fn strip_credentials(url: &mut Url) {
    if url.set_username("").is_err() || url.set_password(None).is_err() {
        tracing::warn!(
            target: LOG_TARGET,
            url = %url,
            "Failed to strip credentials from proxy URL"
        );
    }
}

fn decode_userinfo(component: &str) -> String {
    urlencoding::decode(component)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| component.to_owned())
}
