use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::models::{AnalysisInput, AnalysisResult};
use crate::seo;

/// 分析接口的路由
pub fn router() -> Router {
    Router::new()
        .route("/api/seo/analyze", post(analyze))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
}

async fn analyze(Json(input): Json<AnalysisInput>) -> Json<AnalysisResult> {
    Json(seo::analyze(&input))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// HTTP 服务器
pub struct Server {
    /// 端口
    port: u16,
}

impl Server {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// 启动服务器
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = format!("0.0.0.0:{}", self.port).parse()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("SEO analyzer listening on http://localhost:{}", self.port);

        axum::serve(listener, router()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn post_json(body: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/seo/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn analyze_accepts_partial_camel_case_input() {
        let (status, body) =
            post_json(r#"{"title":"Hello","metaKeywords":"Rust, Web","slug":"hello-rust"}"#).await;
        assert_eq!(status, StatusCode::OK);

        let checks = body["checks"].as_array().unwrap();
        assert_eq!(checks[0]["label"], "Post Title");
        assert_eq!(checks[0]["status"], "warning");
        assert!(checks
            .iter()
            .any(|c| c["label"] == "Focus Keyword" && c["message"] == "Focus keyword: \"rust\""));
        assert!(body["score"].as_u64().unwrap() <= 100);
    }

    #[tokio::test]
    async fn analyze_rejects_malformed_json() {
        let (status, _) = post_json("{not json").await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = router()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
