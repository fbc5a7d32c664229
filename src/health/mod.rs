//! Health check endpoint
//!
//! A single JSON endpoint for deployment probes. The only component the site
//! depends on is the embedded project catalog, so the check reports its state
//! alongside the overall status.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is healthy and ready
    Healthy,
    /// Service is degraded but operational
    Degraded,
    /// Service is unhealthy
    Unhealthy,
}

impl HealthStatus {
    const fn severity(self) -> u8 {
        match self {
            Self::Healthy => 0,
            Self::Degraded => 1,
            Self::Unhealthy => 2,
        }
    }

    /// The worse of two statuses.
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }
}

/// Individual component health
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    /// Component status
    pub status: HealthStatus,
    /// Optional message with details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentHealth {
    /// Create a healthy component with a message.
    #[must_use]
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: Some(message.into()),
        }
    }

    /// Create a degraded component.
    #[must_use]
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Degraded,
            message: Some(message.into()),
        }
    }
}

/// Overall health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponse {
    /// Overall status, the worst of all components
    pub status: HealthStatus,
    /// Application version
    pub version: String,
    /// Timestamp of the check (Unix epoch seconds)
    pub timestamp: u64,
    /// Individual component healths
    pub components: HashMap<String, ComponentHealth>,
}

impl HealthCheckResponse {
    /// Build a response from component healths.
    #[must_use]
    pub fn new(components: HashMap<String, ComponentHealth>) -> Self {
        let status = components
            .values()
            .fold(HealthStatus::Healthy, |acc, c| acc.worst(c.status));

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp,
            components,
        }
    }
}

/// `GET /health` - liveness and readiness in one.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let catalog = state.catalog();

    let mut components = HashMap::new();
    components.insert(
        "catalog".to_string(),
        if catalog.is_empty() {
            ComponentHealth::degraded("project catalog is empty")
        } else {
            ComponentHealth::healthy(format!("{} projects", catalog.len()))
        },
    );

    let response = HealthCheckResponse::new(components);
    let code = match response.status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (code, Json(response)).into_response()
}
