//! GET /ping - 存活检查，不访问数据库

use axum::Json;
use serde::Serialize;

const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    fn alive() -> Self {
        Self {
            status: "ok",
            version: SERVICE_VERSION,
        }
    }
}

pub async fn ping() -> Json<HealthResponse> {
    Json(HealthResponse::alive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_reports_crate_version() {
        let Json(health) = ping().await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
