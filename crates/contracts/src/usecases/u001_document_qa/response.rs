use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Ответ `POST /api/upload` со статусом 2xx
///
/// Все поля необязательные: backend может вернуть неполный объект,
/// UI берёт только то, что есть. `error` и `id` могут прийти вместе.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Непрозрачный идентификатор документа (строка или число в JSON)
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: Option<String>,

    #[serde(default)]
    pub filename: Option<String>,

    /// Извлечённый текст (PDF) или транскрипция (audio/video)
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Ответ `POST /api/chat`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Vec<f64>>,
}

/// Ответ `GET /api/health`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,

    #[serde(default)]
    pub llm_configured: bool,
}

/// Ответ `POST /api/summarize`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub summary: Option<String>,
}

fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
