//! DTOs for the health check endpoint.

use serde::Serialize;

/// `{"healthcheck": {...}}`
#[derive(Debug, Serialize)]
pub struct HealthcheckEnvelope {
    pub healthcheck: HealthcheckItem,
}

/// Deployment details reported by the probe.
#[derive(Debug, Serialize)]
pub struct HealthcheckItem {
    pub endpoint: &'static str,
    pub environment: String,
    pub version: String,
}
