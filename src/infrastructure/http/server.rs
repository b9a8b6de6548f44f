//! HTTP Server
//!
//! 组装 Router（路由 + 中间件）并负责监听与优雅关闭

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::middleware::request_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;
use crate::config::ServerConfig;

/// 请求体大小上限（1 MiB）；超出时 JSON 提取失败，按无效请求体处理
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// 浏览器缓存 CORS 预检结果的时长
const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// 任意来源均可访问；不涉及凭证，只放行 JSON 相关的请求头
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}

/// 完整的应用 Router
///
/// 中间件由内到外：请求体上限 -> 请求日志 -> tower-http trace -> CORS
pub fn build_router(state: Arc<AppState>) -> Router {
    create_routes()
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    addr: String,
    state: Arc<AppState>,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, state: AppState) -> Self {
        Self {
            addr: config.addr(),
            state: Arc::new(state),
        }
    }

    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.state))
    }

    /// 监听并服务，直到 `shutdown_signal` 完成后不再接受新连接
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(addr = %local_addr, "Bookshelf API listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteAuthorRepository, SqliteBookRepository,
    };
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::util::ServiceExt;

    async fn router() -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let state = AppState::new(
            Arc::new(SqliteAuthorRepository::new(pool.clone())),
            Arc::new(SqliteBookRepository::new(pool)),
        );
        HttpServer::new(&ServerConfig::default(), state).router()
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/authors/")
            .header(header::ORIGIN, "http://shelf.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = router().await.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected_without_insert() {
        let app = router().await;
        let name = "x".repeat(MAX_BODY_BYTES + 1);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/authors/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!(r#"{{"name": "{}"}}"#, name)))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let request = Request::builder().uri("/authors/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }
}
