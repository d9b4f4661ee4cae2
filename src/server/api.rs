//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::client::TranslationClient;
use crate::core::errors::TranslationError;
use crate::core::models::TranslationRequest;

/// Application state
#[derive(Clone)]
pub struct AppState {
    translator: Arc<TranslationClient>,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
    model: String,
}

/// Translation response body
#[derive(Serialize)]
pub struct TranslateResponse {
    /// Text returned by the provider
    pub translation: String,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorDetail,
}

/// Error body of an [`ErrorResponse`]
#[derive(Serialize)]
pub struct ErrorDetail {
    /// Human-readable message
    pub message: String,
    /// Stable machine-readable code
    pub code: String,
    /// Provider error payload, only for `translation_failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Maps core errors onto HTTP statuses
pub struct ApiError(TranslationError);

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self.0 {
            TranslationError::TranslationFailed { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "translation_failed",
                message,
                Some(details),
            ),
            err @ TranslationError::MalformedResponse { .. } => {
                (StatusCode::BAD_GATEWAY, "malformed_response", err.to_string(), None)
            }
            err @ TranslationError::TransportError(_) => {
                (StatusCode::BAD_GATEWAY, "transport_error", err.to_string(), None)
            }
            err @ TranslationError::ConfigurationError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "configuration_error",
                err.to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                message,
                code: code.to_string(),
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Health check handler
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.translator.config().model.clone(),
    })
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslationRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let translation = state
        .translator
        .translate_request(&payload)
        .await
        .map_err(|e| {
            warn!("Translation failed: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(TranslateResponse { translation }))
}

/// Build the router around an existing client
pub fn router(translator: TranslationClient) -> Router {
    let state = Arc::new(AppState {
        translator: Arc::new(translator),
    });

    Router::new()
        .route("/", get(health_check))
        .route("/translate", post(translate))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16, translator: TranslationClient) -> anyhow::Result<()> {
    let app = router(translator);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
