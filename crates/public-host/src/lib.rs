//! External domain resolution for axum services
//!
//! Behind reverse proxies and load balancers, the `Host` header a service
//! sees is rarely the one clients used. This crate derives the
//! client-facing domain from an inbound request, for building callback and
//! redirect URLs: a configured development override wins, then the
//! `x-forwarded-host` header, then the `host` header, then the
//! framework-provided hostname.

pub mod config;
pub mod extract;
pub mod resolve;

pub use config::DomainConfig;
pub use extract::{PublicBaseUrl, PublicHost};
pub use resolve::{external_domain, HttpRequestHost, RequestHost};

// Serializes tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
