use crate::usecases::u001_document_qa::api::fetch_health;
use contracts::shared::http_reply::HttpReply;
use contracts::usecases::u001_document_qa::HealthResponse;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Интервал повторной проверки backend
const HEALTH_POLL_MS: u32 = 30_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BackendStatus {
    Checking,
    Online,
    /// Backend отвечает, но ключ LLM не настроен
    NoLlm,
    Offline,
}

impl BackendStatus {
    /// Ответ `/api/health` в статус; ошибка транспорта и не-2xx: Offline
    pub fn from_reply(reply: &Result<HttpReply, String>) -> Self {
        match reply {
            Ok(reply) if reply.is_success() => match reply.parse::<HealthResponse>().structured() {
                Some(health) if !health.llm_configured => BackendStatus::NoLlm,
                _ => BackendStatus::Online,
            },
            _ => BackendStatus::Offline,
        }
    }

    fn display_text(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "Backend: checking…",
            BackendStatus::Online => "Backend: online",
            BackendStatus::NoLlm => "Backend: online (LLM not configured)",
            BackendStatus::Offline => "Backend: offline",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "status-checking",
            BackendStatus::Online => "status-online",
            BackendStatus::NoLlm => "status-degraded",
            BackendStatus::Offline => "status-offline",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(BackendStatus::Checking);

    // Проверка при монтировании и дальше раз в HEALTH_POLL_MS
    Effect::new(move |_| {
        spawn_local(async move {
            loop {
                let next = BackendStatus::from_reply(&fetch_health().await);
                if next == BackendStatus::Offline {
                    log::warn!("backend health check failed");
                }
                // Сигнал уничтожен вместе с компонентом: выходим
                if status.try_set(next).is_some() {
                    break;
                }
                gloo_timers::future::TimeoutFuture::new(HEALTH_POLL_MS).await;
            }
        });
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <div>
                "Built with care — connect to your backend at "
                <span style="font-family: monospace;">"/api"</span>
            </div>
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_health() {
        let online = Ok(HttpReply::new(200, r#"{"ok":true,"llm_configured":true}"#));
        assert_eq!(BackendStatus::from_reply(&online), BackendStatus::Online);

        let no_llm = Ok(HttpReply::new(200, r#"{"ok":true,"llm_configured":false}"#));
        assert_eq!(BackendStatus::from_reply(&no_llm), BackendStatus::NoLlm);
    }

    #[test]
    fn test_status_unknown_body_still_online() {
        let reply = Ok(HttpReply::new(200, "ok"));
        assert_eq!(BackendStatus::from_reply(&reply), BackendStatus::Online);
    }

    #[test]
    fn test_status_offline() {
        assert_eq!(
            BackendStatus::from_reply(&Ok(HttpReply::new(502, "bad gateway"))),
            BackendStatus::Offline
        );
        assert_eq!(
            BackendStatus::from_reply(&Err("TypeError: Failed to fetch".to_string())),
            BackendStatus::Offline
        );
    }
}
