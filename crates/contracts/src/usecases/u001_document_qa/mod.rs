pub mod outcome;
pub mod request;
pub mod response;

pub use outcome::{
    answer_from_reply, answer_from_result, summary_from_reply, summary_from_result, UploadResult,
    UNSUPPORTED_FILE_MESSAGE,
};
pub use request::ChatRequest;
pub use response::{ChatResponse, HealthResponse, SummarizeResponse, UploadResponse};

use crate::usecases::common::UseCaseMetadata;

/// Загрузка файла (multipart, часть `file`)
pub const UPLOAD_PATH: &str = "/api/upload";
/// Вопрос к документу (JSON `ChatRequest`)
pub const CHAT_PATH: &str = "/api/chat";
/// Состояние backend и LLM
pub const HEALTH_PATH: &str = "/api/health";
/// Краткое содержание текста (form, поле `text`)
pub const SUMMARIZE_PATH: &str = "/api/summarize";

/// Имя multipart-части с файлом
pub const UPLOAD_FIELD: &str = "file";
/// Имя поля формы с текстом для summarize
pub const SUMMARIZE_FIELD: &str = "text";

pub struct DocumentQa;

impl UseCaseMetadata for DocumentQa {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "document_qa"
    }

    fn display_name() -> &'static str {
        "AI Q&A App"
    }

    fn description() -> &'static str {
        "Upload content and ask questions — powered by your backend AI."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_names() {
        assert_eq!(DocumentQa::full_name(), "u001_document_qa");
        assert_eq!(DocumentQa::page_id(), "u001_document_qa--usecase");
    }
}
