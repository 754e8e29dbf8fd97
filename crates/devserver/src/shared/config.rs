use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Переменная окружения, перекрывающая `proxy.target`
pub const PROXY_TARGET_ENV: &str = "QA_PROXY_TARGET";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub proxy: ProxyConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Собранный фронтенд (`trunk build`)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProxyConfig {
    /// Origin backend-а, например `http://localhost:8000`
    pub target: String,
    #[serde(default = "default_max_body_mb")]
    pub max_body_mb: usize,
}

fn default_max_body_mb() -> usize {
    200
}

impl ProxyConfig {
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_mb.saturating_mul(1024 * 1024)
    }
}

impl Config {
    /// `host` может быть IP или именем (`localhost`); берётся первый адрес
    pub async fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let host_port = format!("{}:{}", self.server.host, self.server.port);
        let mut addrs = tokio::net::lookup_host(&host_port)
            .await
            .map_err(|e| anyhow::anyhow!("cannot resolve {}: {}", host_port, e))?;
        addrs
            .next()
            .ok_or_else(|| anyhow::anyhow!("no address for {}", host_port))
    }

    /// Непустое значение из окружения заменяет `proxy.target`
    pub fn with_target_override(mut self, target: Option<String>) -> Self {
        if let Some(target) = target.filter(|t| !t.trim().is_empty()) {
            self.proxy.target = target.trim().to_string();
        }
        self
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 5173
static_dir = "crates/frontend/dist"

[proxy]
target = "http://localhost:8000"
max_body_mb = 200
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// `QA_PROXY_TARGET` is applied on top of either.
pub fn load_config() -> anyhow::Result<Config> {
    let config = match find_config_file() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str::<Config>(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str::<Config>(DEFAULT_CONFIG)?
        }
    };

    Ok(config.with_target_override(std::env::var(PROXY_TARGET_ENV).ok()))
}

fn find_config_file() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

/// Каталог статики: абсолютный путь как есть, относительный от текущего каталога
pub fn resolve_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(dir))
        .unwrap_or_else(|_| dir.to_path_buf())
}
