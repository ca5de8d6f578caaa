use mongodb::Client;
use std::time::{Duration, Instant};

use super::ping;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Health check status for MongoDB
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the database is healthy
    pub healthy: bool,
    /// Optional message (e.g., error details)
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

/// Check MongoDB health with a `ping` against the admin database
pub async fn check_health(client: &Client) -> bool {
    ping(client, "admin", PROBE_TIMEOUT).await.is_ok()
}

/// Check MongoDB health with timing information and any error message
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = ping(client, "admin", PROBE_TIMEOUT).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}
