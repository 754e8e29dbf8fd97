//! Классификация ответов backend в значения для UI.
//!
//! Ни одна ветка не является фатальной: HTTP-ошибка, нераспознанное тело и
//! сетевой сбой превращаются в текст, который показывается пользователю.
//!
//! Разбор тела двухступенчатый: текст, который не является JSON, показывается
//! как есть; JSON, в котором нет ожидаемых полей, даёт пустые значения.

use super::response::{ChatResponse, SummarizeResponse, UploadResponse};
use crate::shared::http_reply::{HttpReply, ParsedBody};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const UNSUPPORTED_FILE_MESSAGE: &str =
    "Unsupported file type. Please upload PDF or audio/video.";

/// Результат последней загрузки файла
#[derive(Debug, Clone, PartialEq)]
pub enum UploadResult {
    Failed(String),
    /// Ответ 2xx; может одновременно содержать `error` и `id`
    Uploaded(UploadResponse),
}

impl UploadResult {
    pub fn from_reply(reply: &HttpReply) -> Self {
        if !reply.is_success() {
            if reply.body.is_empty() {
                return Self::Failed(format!("Upload failed: {}", reply.status));
            }
            return Self::Failed(reply.body.clone());
        }

        match reply.parse::<Value>() {
            ParsedBody::Structured(value) => Self::Uploaded(fields_or_default(value)),
            ParsedBody::Raw(text) => Self::Failed(text),
        }
    }

    pub fn from_transport_error(error: impl Into<String>) -> Self {
        Self::Failed(error.into())
    }

    /// Ответ API или сбой транспорта
    pub fn from_result(result: &Result<HttpReply, String>) -> Self {
        match result {
            Ok(reply) => Self::from_reply(reply),
            Err(e) => Self::from_transport_error(e.clone()),
        }
    }

    /// Текст ошибки для показа; пустой `error` ошибкой не считается
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Uploaded(doc) => doc.error.as_deref().filter(|e| !e.is_empty()),
        }
    }

    pub fn document(&self) -> Option<&UploadResponse> {
        match self {
            Self::Uploaded(doc) => Some(doc),
            Self::Failed(_) => None,
        }
    }

    /// ID документа, если backend его вернул (пустая строка не считается)
    pub fn document_id(&self) -> Option<&str> {
        self.document()
            .and_then(|d| d.id.as_deref())
            .filter(|id| !id.is_empty())
    }

    pub fn extracted_text(&self) -> Option<&str> {
        self.document()
            .and_then(|d| d.text.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// JSON, не подходящий под `T`, даёт пустой `T`
fn fields_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_default()
}

/// Текст ответа на вопрос
///
/// Ошибка HTTP отображается с префиксом `Error: `, тело, которое не является
/// JSON, показывается как есть. JSON без строкового `answer` даёт пустой ответ.
pub fn answer_from_reply(reply: &HttpReply) -> String {
    if !reply.is_success() {
        return format!("Error: {}", reply.error_text());
    }
    match reply.parse::<Value>() {
        ParsedBody::Structured(value) => fields_or_default::<ChatResponse>(value)
            .answer
            .unwrap_or_default(),
        ParsedBody::Raw(text) => text,
    }
}

/// Сбой транспорта показывается без префикса
pub fn answer_from_result(result: &Result<HttpReply, String>) -> String {
    match result {
        Ok(reply) => answer_from_reply(reply),
        Err(e) => e.clone(),
    }
}

/// Текст краткого содержания, правила те же, что у `answer_from_reply`
pub fn summary_from_reply(reply: &HttpReply) -> String {
    if !reply.is_success() {
        return format!("Error: {}", reply.error_text());
    }
    match reply.parse::<Value>() {
        ParsedBody::Structured(value) => fields_or_default::<SummarizeResponse>(value)
            .summary
            .unwrap_or_default(),
        ParsedBody::Raw(text) => text,
    }
}

pub fn summary_from_result(result: &Result<HttpReply, String>) -> String {
    match result {
        Ok(reply) => summary_from_reply(reply),
        Err(e) => e.clone(),
    }
}
