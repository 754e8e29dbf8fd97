//! Проброс `/api/*` на backend.
//!
//! Метод, путь, query, заголовки и тело уходят на `proxy.target` как есть;
//! статус, Content-Type и тело ответа возвращаются клиенту без изменений.

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};

#[derive(Clone)]
pub struct ProxyState {
    pub client: reqwest::Client,
    /// Origin без завершающего `/`
    pub target: String,
    pub max_body_bytes: usize,
}

impl ProxyState {
    /// Системные HTTP_PROXY/HTTPS_PROXY не используются: backend обычно локальный
    pub fn new(target: &str, max_body_bytes: usize) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().no_proxy().build()?;
        Ok(Self {
            client,
            target: target.trim_end_matches('/').to_string(),
            max_body_bytes,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {limit} bytes")]
    RequestTooLarge { limit: usize },

    #[error("failed to read request body: {0}")]
    RequestBody(#[source] axum::Error),

    #[error("backend at {url} is unreachable: {source}")]
    Upstream {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read backend response: {0}")]
    ResponseBody(#[source] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::RequestTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ProxyError::RequestBody(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { .. } | ProxyError::ResponseBody(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!("proxy error: {}", self);
        (self.status(), self.to_string()).into_response()
    }
}

/// `http://localhost:8000` + `/api/chat?x=1`
pub fn upstream_url(target: &str, path_and_query: &str) -> String {
    let target = target.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{}{}", target, path_and_query)
    } else {
        format!("{}/{}", target, path_and_query)
    }
}

/// Ошибка чтения тела: превышение лимита или обрыв со стороны клиента
fn body_error(err: axum::Error, limit: usize) -> ProxyError {
    if is_length_limit(&err) {
        ProxyError::RequestTooLarge { limit }
    } else {
        ProxyError::RequestBody(err)
    }
}

fn is_length_limit(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.is::<http_body_util::LengthLimitError>() {
            return true;
        }
        current = e.source();
    }
    false
}

/// Заголовки запроса для upstream, без hop-by-hop
fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let hop_by_hop = [
        header::HOST,
        header::CONNECTION,
        header::CONTENT_LENGTH,
        header::TRANSFER_ENCODING,
        header::UPGRADE,
        header::TE,
        header::PROXY_AUTHORIZATION,
    ];
    let mut headers = incoming.clone();
    for name in &hop_by_hop {
        headers.remove(name);
    }
    headers
}

/// ANY /api/*path
pub async fn forward(
    State(state): State<ProxyState>,
    req: Request<Body>,
) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = upstream_url(&state.target, path_and_query);

    let bytes = to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| body_error(e, state.max_body_bytes))?;

    tracing::debug!("{} {} -> {} ({} bytes)", parts.method, path_and_query, url, bytes.len());

    let upstream = state
        .client
        .request(parts.method.clone(), &url)
        .headers(forwarded_headers(&parts.headers))
        .body(bytes)
        .send()
        .await
        .map_err(|source| ProxyError::Upstream {
            url: url.clone(),
            source,
        })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let body = upstream.bytes().await.map_err(ProxyError::ResponseBody)?;

    if !status.is_success() {
        tracing::warn!("backend answered {} for {}", status, path_and_query);
    }

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    } else {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
    }
    Ok(response)
}
