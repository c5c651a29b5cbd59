//! Local proxy server
//!
//! Forwards authenticated `/api/v1/*` requests to the real gateway host so
//! browsers and scripts never see the upstream base URL, and serves the
//! deep-link helper endpoint. The proxy adds nothing to responses: the
//! upstream status code and body come back verbatim, including non-2xx
//! error bodies.

use axum::{
    extract::{Path, Query, RawQuery, State},
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ServerConfig;
use crate::error::{DeskboardError, Result};
use crate::gateway::ACCESS_TOKEN_HEADER;

/// Shared state for the proxy handlers
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream_url: String,
}

impl ProxyState {
    /// Build proxy state from server configuration
    ///
    /// # Errors
    ///
    /// Returns [`DeskboardError::Config`] when the upstream URL is missing
    /// or the HTTP client cannot be constructed.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        if config.upstream_url.is_empty() {
            return Err(DeskboardError::Config(
                "server.upstream_url must be set to run the proxy".to_string(),
            )
            .into());
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("deskboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                DeskboardError::Config(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            upstream_url: config.upstream_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Build the proxy router
pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/v1/*path", any(proxy))
        .route("/build-url-to-redirect", get(build_redirect_url))
        .with_state(state)
}

/// Run the proxy server until it is shut down
///
/// # Errors
///
/// Returns an error when the state cannot be built or the listener fails
/// to bind.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let state = ProxyState::new(config)?;
    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Proxy listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn proxy(
    State(state): State<ProxyState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let token = match headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(token) => token.to_string(),
        None => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "error": "API token not provided" })),
            )
                .into_response();
        }
    };

    let mut url = format!("{}/api/v1/{}", state.upstream_url, path);
    if let Some(query) = query {
        url.push('?');
        url.push_str(&query);
    }
    tracing::debug!("Proxying {} {}", method, url);

    let upstream_method = reqwest::Method::from_bytes(method.as_str().as_bytes())
        .unwrap_or(reqwest::Method::GET);
    let forward_body = matches!(method, Method::POST | Method::PUT | Method::PATCH);

    let mut request = state
        .client
        .request(upstream_method, &url)
        .header(ACCESS_TOKEN_HEADER, &token)
        .header("Content-Type", "application/json");
    if forward_body {
        request = request.body(body.to_vec());
    }

    match request.send().await {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status().as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            let body = upstream.bytes().await.unwrap_or_default();
            (status, [(CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(e) => {
            tracing::error!("Upstream request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to process the request" })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct RedirectParams {
    #[serde(rename = "accountId")]
    account_id: String,
    #[serde(rename = "conversationId")]
    conversation_id: String,
}

#[derive(Debug, Serialize)]
struct RedirectResponse {
    url: String,
}

/// Build the deep-link URL for opening a conversation in the upstream UI
async fn build_redirect_url(
    State(state): State<ProxyState>,
    Query(params): Query<RedirectParams>,
) -> Json<RedirectResponse> {
    Json(RedirectResponse {
        url: format!(
            "{}/app/accounts/{}/conversations/{}",
            state.upstream_url, params.account_id, params.conversation_id
        ),
    })
}
