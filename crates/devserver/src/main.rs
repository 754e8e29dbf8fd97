pub mod proxy;
pub mod routes;
pub mod shared;

use shared::config::{load_config, resolve_static_dir};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("devserver.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = load_config()?;
    let static_dir = resolve_static_dir(&config);
    if !static_dir.join("index.html").exists() {
        tracing::warn!(
            "{} has no index.html, run `trunk build` in crates/frontend first",
            static_dir.display()
        );
    }

    let state = proxy::ProxyState::new(&config.proxy.target, config.proxy.max_body_bytes())?;
    let app = routes::build_router(state, &static_dir);

    let addr = config.socket_addr().await?;
    tracing::info!("Serving {} on http://{}", static_dir.display(), addr);
    tracing::info!("Forwarding /api/* to {}", config.proxy.target);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;
    Ok(())
}
