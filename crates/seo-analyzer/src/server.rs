use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{request::Parts, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info};

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::error::ApiError;
use crate::insert::insert_keyword;
use crate::model::AnalysisResult;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<Analyzer>,
    environment: String,
    started_at: Instant,
}

/// Build the HTTP router with CORS and request logging applied.
pub fn router(analyzer: Arc<Analyzer>, config: &Config) -> Router {
    let state = AppState {
        analyzer,
        environment: config.environment.clone(),
        started_at: Instant::now(),
    };

    Router::new()
        .route("/", get(root))
        .route("/api/test", get(api_test))
        .route("/api/analyze", post(analyze).get(analyze_usage))
        .route("/api/insert-keyword", post(insert))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .layer(cors_layer(config.clone()))
        .with_state(state)
}

fn cors_layer(config: Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| config.origin_allowed(o))
                    .unwrap_or(false)
            },
        ))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            CONTENT_LENGTH,
            HeaderName::from_static("x-requested-with"),
            ACCEPT,
        ])
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        "api_request"
    );
    response
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// --- Info endpoints ---

#[derive(Debug, Serialize, Deserialize)]
struct RootResponse {
    message: String,
    timestamp: String,
    version: String,
    environment: String,
    endpoints: RootEndpoints,
}

#[derive(Debug, Serialize, Deserialize)]
struct RootEndpoints {
    test: String,
    analyze: String,
    health: String,
}

async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "SEO Analyzer API is running!".to_string(),
        timestamp: timestamp(),
        version: VERSION.to_string(),
        environment: state.environment,
        endpoints: RootEndpoints {
            test: "/api/test".to_string(),
            analyze: "/api/analyze (POST)".to_string(),
            health: "/health".to_string(),
        },
    })
}

#[derive(Debug, Serialize, Deserialize)]
struct TestResponse {
    message: String,
    timestamp: String,
    method: String,
    environment: String,
}

async fn api_test(State(state): State<AppState>, method: Method) -> Json<TestResponse> {
    Json(TestResponse {
        message: "API test endpoint working!".to_string(),
        timestamp: timestamp(),
        method: method.to_string(),
        environment: state.environment,
    })
}

#[derive(Debug, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    /// Seconds since the router was built
    uptime: f64,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: timestamp(),
        version: VERSION.to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}

// --- Analysis ---

#[derive(Debug, Default, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    text: Option<String>,
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let request = payload
        .inspect_err(|e| debug!(error = %e, "rejected analyze body"))
        .map(|Json(req)| req)
        .unwrap_or_default();
    let text = request
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Text is required".to_string()))?;

    info!(text_len = text.len(), "analyzing text");
    Ok(Json(state.analyzer.analyze(&text).await))
}

#[derive(Debug, Serialize, Deserialize)]
struct UsageResponse {
    message: String,
    example: UsageExample,
    timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct UsageExample {
    method: String,
    url: String,
    body: UsageBody,
}

#[derive(Debug, Serialize, Deserialize)]
struct UsageBody {
    text: String,
}

async fn analyze_usage() -> Json<UsageResponse> {
    Json(UsageResponse {
        message: "Use POST method to analyze text".to_string(),
        example: UsageExample {
            method: "POST".to_string(),
            url: "/api/analyze".to_string(),
            body: UsageBody {
                text: "Your text here".to_string(),
            },
        },
        timestamp: timestamp(),
    })
}

// --- Keyword insertion ---

#[derive(Debug, Default, Deserialize)]
struct InsertRequest {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    keyword: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct InsertResponse {
    text: String,
}

async fn insert(
    payload: Result<Json<InsertRequest>, JsonRejection>,
) -> Result<Json<InsertResponse>, ApiError> {
    let request = payload
        .inspect_err(|e| debug!(error = %e, "rejected insert body"))
        .map(|Json(req)| req)
        .unwrap_or_default();
    let keyword = request
        .keyword
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Keyword is required".to_string()))?;
    let text = request.text.unwrap_or_default();

    Ok(Json(InsertResponse {
        text: insert_keyword(&text, &keyword),
    }))
}

// --- Fallback ---

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotFoundResponse {
    error: String,
    method: String,
    path: String,
    available_endpoints: AvailableEndpoints,
    timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailableEndpoints {
    root: String,
    test: String,
    analyze: String,
    insert_keyword: String,
    health: String,
}

async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    let body = NotFoundResponse {
        error: "Endpoint not found".to_string(),
        method: method.to_string(),
        path: uri.to_string(),
        available_endpoints: AvailableEndpoints {
            root: "GET /".to_string(),
            test: "GET /api/test".to_string(),
            analyze: "POST /api/analyze".to_string(),
            insert_keyword: "POST /api/insert-keyword".to_string(),
            health: "GET /health".to_string(),
        },
        timestamp: timestamp(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}
