//! Axum extractors for the resolved external domain

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::config::DomainConfig;
use crate::resolve::{external_domain, HttpRequestHost};

/// The externally-visible domain for the current request.
///
/// Never rejects; with every source absent it carries an empty string.
/// Note that clients can set `X-Forwarded-Host` and `Host` to arbitrary
/// values, so validate the result before trusting it for anything beyond
/// URL construction.
pub struct PublicHost(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for PublicHost
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        // Environment is read per request, not cached at startup
        let config = DomainConfig::from_env();
        let hostname = parts.uri.host().unwrap_or_default();
        let request = HttpRequestHost::new(&parts.headers, hostname);

        Ok(Self(external_domain(config.dev_domain.as_deref(), &request)))
    }
}

/// `{scheme}://{domain}` for the current request, for building callback
/// and redirect URLs. The scheme comes from `x-forwarded-proto`,
/// defaulting to `http`.
pub struct PublicBaseUrl(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for PublicBaseUrl
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let PublicHost(domain) = PublicHost::from_request_parts(parts, state).await?;
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or("http");

        Ok(Self(format!("{}://{}", scheme, domain)))
    }
}
