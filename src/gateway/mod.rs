//! Gateway host
//!
//! Serves the compiled web UI and forwards `/api/*` to the device, so the
//! browser talks to a single origin.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{OriginalUri, State},
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{debug, info, warn};

use crate::config::Config;

/// Shared gateway state
#[derive(Clone)]
pub struct GatewayState {
    client: reqwest::Client,
    device_url: Arc<str>,
}

impl GatewayState {
    pub fn new(device_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            device_url: Arc::from(device_url.trim_end_matches('/')),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("device unreachable: {0}")]
    Device(#[from] reqwest::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        warn!("{}", self);
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Build the gateway routes.
pub fn router(config: &Config) -> Router {
    // Unknown paths get index.html so client-side routes survive a reload
    let index = config.assets_dir.join("index.html");
    let assets = ServeDir::new(&config.assets_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/{*path}", any(proxy_api))
        .fallback_service(assets)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(GatewayState::new(&config.device_url))
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let ip: IpAddr = config.host.parse()?;
    let addr = SocketAddr::new(ip, config.port);
    let app = router(&config);

    info!(
        device = %config.device_url,
        assets = %config.assets_dir.display(),
        "Forwarding /api to device"
    );
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// ANY /api/* - forward to the device unchanged
async fn proxy_api(
    State(state): State<GatewayState>,
    OriginalUri(uri): OriginalUri,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    // Raw path and query, still percent-encoded
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/api");
    let url = format!("{}{}", state.device_url, path_and_query);
    debug!(%method, %url, "Forwarding to device");

    let mut request = state.client.request(method, &url).body(body);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type.clone());
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(content_type) => {
            response.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}
