//! Stateless relay in front of the provider API.
//!
//! The browser cannot call the provider directly, so requests come here
//! with the credential in a header and the provider sub-path in the query
//! string. Upstream status and JSON body are returned untouched.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use log::{debug, error, warn};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::cloudflare::{API_KEY_HEADER, ZONE_ID_HEADER};

pub const PROXY_ROUTE: &str = "/api/cloudflare";

const ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS,PATCH";
const ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, \
Content-Length, Content-MD5, Content-Type, Date, X-Api-Version, X-Cloudflare-API-Key, X-Zone-ID";

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream: String,
}

impl ProxyState {
    pub fn new(upstream: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream: upstream.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ForwardQuery {
    #[serde(default)]
    path: String,
}

pub fn proxy_router(state: ProxyState) -> Router {
    Router::new()
        .route(PROXY_ROUTE, any(forward))
        .layer(middleware::map_response(allow_all_cors))
        .with_state(state)
}

async fn allow_all_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}

fn failure(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "success": false,
            "errors": [{ "message": message }],
        })),
    )
        .into_response()
}

async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    headers: HeaderMap,
    Query(query): Query<ForwardQuery>,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let api_key = match headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        Some(api_key) => api_key,
        None => {
            warn!("Rejected {} without API key", method);
            return failure(
                StatusCode::BAD_REQUEST,
                "Missing X-Cloudflare-API-Key header",
            );
        }
    };

    if query.path.is_empty() {
        return failure(StatusCode::BAD_REQUEST, "Missing path query parameter");
    }
    // Anything else could rewrite the authority of the upstream URL.
    if !query.path.starts_with('/') {
        warn!("Rejected {} with relative path {:?}", method, query.path);
        return failure(StatusCode::BAD_REQUEST, "Invalid path query parameter");
    }

    let zone_id = headers
        .get(ZONE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    debug!("{} {} (zone {})", method, query.path, zone_id);

    match relay(&state, method, api_key, &query.path, body).await {
        Ok((status, data)) => (status, Json(data)).into_response(),
        Err(e) => {
            error!("Proxy error: {}", e);
            failure(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

async fn relay(
    state: &ProxyState,
    method: Method,
    api_key: &str,
    path: &str,
    body: Bytes,
) -> Result<(StatusCode, Value), reqwest::Error> {
    let url = format!("{}{}", state.upstream.trim_end_matches('/'), path);
    let sends_body = matches!(method, Method::POST | Method::PUT | Method::PATCH) && !body.is_empty();

    let mut request = state
        .client
        .request(method, url)
        .bearer_auth(api_key)
        .header(header::CONTENT_TYPE, "application/json");
    if sends_body {
        request = request.body(body);
    }

    let response = request.send().await?;
    let status = response.status();
    let data = response.json::<Value>().await?;
    Ok((status, data))
}
