//! External domain resolution
//!
//! Walks a fixed priority chain to find the domain name by which external
//! clients reach the service:
//! 1. the development override domain from configuration
//! 2. the first entry of the `x-forwarded-host` header
//! 3. the `host` header, minus any `:port` suffix
//! 4. the framework-provided hostname

use axum::http::HeaderMap;
use tracing::debug;

/// The request fields domain resolution depends on.
///
/// Kept narrow so the chain can be exercised in tests without building a
/// full HTTP request.
pub trait RequestHost {
    /// Case-insensitive header lookup. Absent and non-UTF-8 values are
    /// `None`.
    fn header(&self, name: &str) -> Option<&str>;

    /// Framework-provided hostname, the last-resort fallback.
    fn hostname(&self) -> &str;
}

/// [`RequestHost`] over axum's header map plus a precomputed hostname.
pub struct HttpRequestHost<'a> {
    headers: &'a HeaderMap,
    hostname: &'a str,
}

impl<'a> HttpRequestHost<'a> {
    pub fn new(headers: &'a HeaderMap, hostname: &'a str) -> Self {
        Self { headers, hostname }
    }
}

impl RequestHost for HttpRequestHost<'_> {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn hostname(&self) -> &str {
        self.hostname
    }
}

/// Resolve the externally-visible domain for a request.
///
/// First match wins. A non-empty `dev_override` is returned verbatim:
/// local deployments may rewrite or strip forwarding headers, so an
/// explicit override beats whatever the request claims. Next comes the
/// nearest proxy's `x-forwarded-host` entry, then the `host` header
/// without its port, then the framework hostname unchanged.
///
/// Pure and infallible. Empty values count as absent and the chain falls
/// through; if every source is empty the (possibly empty) hostname is
/// still returned.
pub fn external_domain(dev_override: Option<&str>, request: &impl RequestHost) -> String {
    if let Some(domain) = dev_override.filter(|d| !d.is_empty()) {
        debug!(domain, source = "dev_override", "resolved external domain");
        return domain.to_string();
    }

    if let Some(forwarded) = request.header("x-forwarded-host").filter(|v| !v.is_empty()) {
        let domain = first_forwarded_host(forwarded);
        debug!(domain, source = "x-forwarded-host", "resolved external domain");
        return domain.to_string();
    }

    if let Some(host) = request.header("host").filter(|v| !v.is_empty()) {
        let domain = strip_port(host);
        debug!(domain, source = "host", "resolved external domain");
        return domain.to_string();
    }

    let domain = request.hostname();
    debug!(domain, source = "hostname", "resolved external domain");
    domain.to_string()
}

/// First entry of a comma-separated forwarded-host chain, trimmed.
///
/// Proxies prepend rather than append, so the first entry is the one set
/// by the hop nearest the client.
fn first_forwarded_host(value: &str) -> &str {
    value.split(',').next().unwrap_or(value).trim()
}

/// Drop a `:port` suffix from a host header value.
///
/// Splits on the first colon, so an IPv6 literal host truncates at its
/// first colon. Known limitation, kept to preserve the documented
/// contract.
fn strip_port(host: &str) -> &str {
    host.split(':').next().unwrap_or(host)
}
