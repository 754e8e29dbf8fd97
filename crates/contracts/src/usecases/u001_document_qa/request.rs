use serde::{Deserialize, Serialize};

/// Тело запроса `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Текст вопроса
    pub question: String,

    /// ID загруженного документа; поле отсутствует в JSON, если документа нет
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
}

impl ChatRequest {
    pub fn new(question: impl Into<String>, doc_id: Option<String>) -> Self {
        Self {
            question: question.into(),
            doc_id,
        }
    }
}
