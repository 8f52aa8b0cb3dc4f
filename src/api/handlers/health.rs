//! Handler for the health check endpoint.

use axum::extract::State;

use crate::api::dto::health::{HealthcheckEnvelope, HealthcheckItem};
use crate::api::response::JsonEnvelope;
use crate::state::AppState;

/// Reports the running environment and version.
///
/// # Endpoint
///
/// `GET /v1/healthcheck`
///
/// # Response
///
/// ```json
/// {
///   "healthcheck": {
///     "endpoint": "Health Check Endpoint",
///     "environment": "development",
///     "version": "1.0.0"
///   }
/// }
/// ```
pub async fn healthcheck_handler(
    State(state): State<AppState>,
) -> JsonEnvelope<HealthcheckEnvelope> {
    JsonEnvelope(HealthcheckEnvelope {
        healthcheck: HealthcheckItem {
            endpoint: "Health Check Endpoint",
            environment: state.environment,
            version: state.version,
        },
    })
}
