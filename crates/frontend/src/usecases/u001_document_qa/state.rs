//! Document Q&A - page state
//!
//! Всё состояние страницы в одной структуре. Переходы делают только `begin_*`,
//! `finish_*` и `release`, остальные методы это проекции для view. Браузерных
//! типов здесь нет, поэтому сценарии проверяются обычными тестами.

use contracts::shared::file_kind::{is_acceptable, FileMeta};
use contracts::shared::preview::preview_text;
use contracts::usecases::u001_document_qa::{ChatRequest, UploadResult, UNSUPPORTED_FILE_MESSAGE};
use std::borrow::Cow;

/// Какой запрос держит флаг "в процессе"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Upload,
    Ask,
    Summarize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QaState {
    pub file: Option<FileMeta>,
    pub upload_result: Option<UploadResult>,
    pub document_id: Option<String>,
    pub extracted_text: String,
    pub show_full_text: bool,
    pub question: String,
    pub answer: Option<String>,
    pub summary: Option<String>,
    pub uploading: bool,
    pub asking: bool,
    pub summarizing: bool,
}

impl QaState {
    /// Новый файл (выбор в input или drop); прошлый результат загрузки сбрасывается
    pub fn select_file(&mut self, file: FileMeta) {
        self.file = Some(file);
        self.upload_result = None;
        self.summary = None;
    }

    /// Проверка перед отправкой. `false`: запрос не отправляется.
    ///
    /// Неподдерживаемый файл даёт ошибку в `upload_result`.
    pub fn begin_upload(&mut self) -> bool {
        match &self.file {
            None => false,
            Some(file) if !file.is_supported() => {
                self.upload_result = Some(UploadResult::Failed(
                    UNSUPPORTED_FILE_MESSAGE.to_string(),
                ));
                false
            }
            Some(_) => {
                self.uploading = true;
                true
            }
        }
    }

    /// ID и текст берутся, только если backend их вернул; иначе остаются прежние
    pub fn finish_upload(&mut self, result: UploadResult) {
        if let Some(id) = result.document_id() {
            self.document_id = Some(id.to_string());
        }
        if let Some(text) = result.extracted_text() {
            self.extracted_text = text.to_string();
        }
        self.upload_result = Some(result);
    }

    /// Пустой вопрос: ничего не отправляем, ответ не трогаем
    pub fn begin_ask(&mut self) -> Option<ChatRequest> {
        if self.question.is_empty() {
            return None;
        }
        self.asking = true;
        Some(ChatRequest::new(
            self.question.clone(),
            self.document_id.clone(),
        ))
    }

    pub fn finish_ask(&mut self, answer: String) {
        self.answer = Some(answer);
    }

    /// Текст для summarize: всегда полный, без обрезки превью
    pub fn begin_summary(&mut self) -> Option<String> {
        if self.extracted_text.is_empty() {
            return None;
        }
        self.summarizing = true;
        Some(self.extracted_text.clone())
    }

    pub fn finish_summary(&mut self, summary: String) {
        self.summary = Some(summary);
    }

    pub fn release(&mut self, activity: Activity) {
        match activity {
            Activity::Upload => self.uploading = false,
            Activity::Ask => self.asking = false,
            Activity::Summarize => self.summarizing = false,
        }
    }

    pub fn toggle_full_text(&mut self) {
        self.show_full_text = !self.show_full_text;
    }

    // ------------------------------------------------------------------
    // Проекции для view
    // ------------------------------------------------------------------

    pub fn file_supported(&self) -> bool {
        is_acceptable(self.file.as_ref())
    }

    pub fn upload_disabled(&self) -> bool {
        self.uploading || !self.file_supported()
    }

    pub fn upload_label(&self) -> &'static str {
        if self.uploading {
            "Uploading…"
        } else {
            "Upload"
        }
    }

    pub fn ask_label(&self) -> &'static str {
        if self.asking {
            "Asking…"
        } else {
            "Ask"
        }
    }

    pub fn summarize_label(&self) -> &'static str {
        if self.summarizing {
            "Summarizing…"
        } else {
            "Summarize"
        }
    }

    pub fn upload_error(&self) -> Option<&str> {
        self.upload_result.as_ref().and_then(UploadResult::error)
    }

    pub fn ready_for_chat(&self) -> bool {
        self.document_id.is_some()
    }

    pub fn preview(&self) -> Cow<'_, str> {
        preview_text(&self.extracted_text, self.show_full_text)
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.show_full_text {
            "Show less"
        } else {
            "Show more"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::http_reply::HttpReply;
    use contracts::shared::preview::{ELLIPSIS, PREVIEW_LIMIT};
    use contracts::usecases::u001_document_qa::{answer_from_reply, answer_from_result};

    fn pdf() -> FileMeta {
        FileMeta::new("report.pdf", "application/pdf", 1024)
    }

    #[test]
    fn test_no_file_upload_disabled() {
        let mut state = QaState::default();
        assert!(!state.file_supported());
        assert!(state.upload_disabled());
        assert!(!state.begin_upload());
        assert!(!state.uploading);
        assert_eq!(state.upload_result, None);
    }

    #[test]
    fn test_unsupported_file_rejected_before_sending() {
        let mut state = QaState::default();
        state.select_file(FileMeta::new("notes.txt", "text/plain", 5));
        assert!(state.upload_disabled());
        assert!(!state.begin_upload());
        assert!(!state.uploading);
        assert_eq!(state.upload_error(), Some(UNSUPPORTED_FILE_MESSAGE));
    }

    #[test]
    fn test_upload_success_adopts_id_and_text() {
        let mut state = QaState::default();
        state.select_file(pdf());
        assert!(!state.upload_disabled());

        assert!(state.begin_upload());
        assert!(state.uploading);
        assert_eq!(state.upload_label(), "Uploading…");
        assert!(state.upload_disabled());

        let reply = HttpReply::new(
            200,
            r#"{"id":"doc-1","filename":"report.pdf","text":"Hello world"}"#,
        );
        state.finish_upload(UploadResult::from_reply(&reply));
        state.release(Activity::Upload);

        assert_eq!(state.document_id.as_deref(), Some("doc-1"));
        assert_eq!(state.extracted_text, "Hello world");
        assert_eq!(state.upload_error(), None);
        assert!(state.ready_for_chat());
        assert!(!state.uploading);
        assert_eq!(state.upload_label(), "Upload");
    }

    #[test]
    fn test_upload_http_error_keeps_document_unset() {
        let mut state = QaState::default();
        state.select_file(pdf());
        assert!(state.begin_upload());

        state.finish_upload(UploadResult::from_reply(&HttpReply::new(
            500,
            "internal error",
        )));
        state.release(Activity::Upload);

        assert_eq!(state.upload_error(), Some("internal error"));
        assert_eq!(state.document_id, None);
        assert!(!state.uploading);
    }

    #[test]
    fn test_transport_failure_is_shown_and_flag_released() {
        let mut state = QaState::default();
        state.select_file(pdf());
        assert!(state.begin_upload());

        state.finish_upload(UploadResult::from_transport_error(
            "TypeError: Failed to fetch",
        ));
        state.release(Activity::Upload);

        assert_eq!(state.upload_error(), Some("TypeError: Failed to fetch"));
        assert!(!state.uploading);
    }

    #[test]
    fn test_new_selection_resets_result_but_keeps_document() {
        let mut state = QaState::default();
        state.select_file(pdf());
        state.begin_upload();
        state.finish_upload(UploadResult::from_reply(&HttpReply::new(
            200,
            r#"{"id":"doc-1","text":"Hello world"}"#,
        )));
        state.release(Activity::Upload);

        state.select_file(FileMeta::new("talk.mp3", "audio/mpeg", 10));
        assert_eq!(state.upload_result, None);
        assert_eq!(state.document_id.as_deref(), Some("doc-1"));
        assert_eq!(state.extracted_text, "Hello world");
    }

    #[test]
    fn test_ask_scoped_to_document() {
        let mut state = QaState {
            document_id: Some("doc-1".to_string()),
            question: "What is this about?".to_string(),
            ..Default::default()
        };

        let request = state.begin_ask().expect("request must be sent");
        assert!(state.asking);
        assert_eq!(state.ask_label(), "Asking…");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["doc_id"], "doc-1");
        assert_eq!(body["question"], "What is this about?");

        let reply = HttpReply::new(200, r#"{"answer":"It is about testing."}"#);
        state.finish_ask(answer_from_reply(&reply));
        state.release(Activity::Ask);

        assert_eq!(state.answer.as_deref(), Some("It is about testing."));
        assert!(!state.asking);
    }

    #[test]
    fn test_ask_without_document_has_no_doc_id() {
        let mut state = QaState {
            question: "hi".to_string(),
            ..Default::default()
        };
        let request = state.begin_ask().unwrap();
        assert_eq!(request.doc_id, None);
    }

    #[test]
    fn test_empty_question_is_a_no_op() {
        let mut state = QaState {
            answer: Some("previous".to_string()),
            ..Default::default()
        };
        assert_eq!(state.begin_ask(), None);
        assert!(!state.asking);
        assert_eq!(state.answer.as_deref(), Some("previous"));
    }

    #[test]
    fn test_ask_http_error_prefixed() {
        let mut state = QaState {
            question: "q".to_string(),
            ..Default::default()
        };
        state.begin_ask();
        state.finish_ask(answer_from_reply(&HttpReply::new(500, "")));
        state.release(Activity::Ask);
        assert_eq!(state.answer.as_deref(), Some("Error: 500"));
    }

    #[test]
    fn test_preview_toggle() {
        let long = "x".repeat(PREVIEW_LIMIT + 50);
        let mut state = QaState {
            extracted_text: long.clone(),
            ..Default::default()
        };

        let collapsed = state.preview().into_owned();
        assert!(collapsed.ends_with(ELLIPSIS));
        assert_eq!(collapsed.chars().count(), PREVIEW_LIMIT + 1);
        assert_eq!(state.toggle_label(), "Show more");

        state.toggle_full_text();
        assert_eq!(state.preview(), long);
        assert_eq!(state.toggle_label(), "Show less");

        state.toggle_full_text();
        assert_eq!(state.preview().into_owned(), collapsed);
    }

    #[test]
    fn test_short_text_toggle_keeps_text() {
        let mut state = QaState {
            extracted_text: "Hello world".to_string(),
            ..Default::default()
        };
        assert_eq!(state.preview(), "Hello world");
        state.toggle_full_text();
        assert_eq!(state.toggle_label(), "Show less");
        assert_eq!(state.preview(), "Hello world");
    }

    #[test]
    fn test_ask_transport_failure_becomes_answer() {
        let mut state = QaState {
            question: "q".to_string(),
            answer: Some("previous".to_string()),
            ..Default::default()
        };
        assert!(state.begin_ask().is_some());
        state.finish_ask(answer_from_result(&Err("TypeError: Failed to fetch".to_string())));
        state.release(Activity::Ask);
        assert_eq!(state.answer.as_deref(), Some("TypeError: Failed to fetch"));
        assert!(!state.asking);
    }

    #[test]
    fn test_upload_error_with_id_still_enables_chat() {
        let mut state = QaState::default();
        state.select_file(pdf());
        assert!(state.begin_upload());
        state.finish_upload(UploadResult::from_reply(&HttpReply::new(
            200,
            r#"{"id":"doc-1","filename":"report.pdf","error":"partial extraction"}"#,
        )));
        state.release(Activity::Upload);

        assert_eq!(state.upload_error(), Some("partial extraction"));
        assert!(state.ready_for_chat());

        state.question = "What is this about?".to_string();
        let request = state.begin_ask().unwrap();
        assert_eq!(request.doc_id.as_deref(), Some("doc-1"));
    }

    #[test]
    fn test_summary_uses_full_text() {
        let long = "y".repeat(PREVIEW_LIMIT * 2);
        let mut state = QaState {
            extracted_text: long.clone(),
            ..Default::default()
        };
        assert_eq!(state.begin_summary(), Some(long));
        assert!(state.summarizing);
        state.finish_summary("short".to_string());
        state.release(Activity::Summarize);
        assert_eq!(state.summary.as_deref(), Some("short"));
        assert!(!state.summarizing);
    }

    #[test]
    fn test_summary_without_text_is_a_no_op() {
        let mut state = QaState::default();
        assert_eq!(state.begin_summary(), None);
        assert!(!state.summarizing);
    }
}
