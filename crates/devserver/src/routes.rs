use crate::proxy::{self, ProxyState};
use axum::http::{header, Method};
use axum::routing::{any, get};
use axum::{middleware, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// `/api/*` уходит на backend, остальное: статика фронтенда
pub fn build_router(state: ProxyState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    // Неизвестные пути отдают index.html (одна страница)
    let static_files =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/*path", any(proxy::forward))
        .with_state(state)
        .fallback_service(static_files)
        .layer(cors)
        .layer(middleware::from_fn(
            crate::shared::request_log::request_logger,
        ))
}
