//! Library configuration

use std::env;

/// Environment variable naming the development domain override.
pub const DEV_DOMAIN_VAR: &str = "DEV_DOMAIN_OVERRIDE";

/// Domain-resolution configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct DomainConfig {
    /// Trusted override for local deployments, where proxies may rewrite
    /// or strip forwarding headers. Wins over every request-derived source.
    pub dev_domain: Option<String>,
}

impl DomainConfig {
    /// Load configuration from environment variables
    ///
    /// Read per call rather than cached at startup, so the override can
    /// change under a live process. Unset, empty, and non-Unicode values
    /// all count as absent.
    pub fn from_env() -> Self {
        Self {
            dev_domain: env::var(DEV_DOMAIN_VAR).ok().filter(|v| !v.is_empty()),
        }
    }
}
