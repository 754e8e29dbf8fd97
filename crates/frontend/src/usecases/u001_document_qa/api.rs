//! Document Q&A - API functions

use crate::shared::api_utils::api_url;
use crate::shared::http::{self, js_error_text};
use contracts::shared::http_reply::HttpReply;
use contracts::usecases::u001_document_qa::{
    ChatRequest, CHAT_PATH, HEALTH_PATH, SUMMARIZE_FIELD, SUMMARIZE_PATH, UPLOAD_FIELD,
    UPLOAD_PATH,
};
use web_sys::FormData;

/// Загрузить файл: multipart, одна часть `file` с именем файла
pub async fn upload_file(file: web_sys::File) -> Result<HttpReply, String> {
    let form = FormData::new().map_err(|e| js_error_text(&e))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
        .map_err(|e| js_error_text(&e))?;

    http::post_form(&api_url(UPLOAD_PATH), &form).await
}

/// Задать вопрос (с `doc_id`, если документ загружен)
pub async fn ask(request: &ChatRequest) -> Result<HttpReply, String> {
    http::post_json(&api_url(CHAT_PATH), request).await
}

/// Краткое содержание извлечённого текста
pub async fn summarize(text: &str) -> Result<HttpReply, String> {
    let form = FormData::new().map_err(|e| js_error_text(&e))?;
    form.append_with_str(SUMMARIZE_FIELD, text)
        .map_err(|e| js_error_text(&e))?;

    http::post_form(&api_url(SUMMARIZE_PATH), &form).await
}

pub async fn fetch_health() -> Result<HttpReply, String> {
    http::get(&api_url(HEALTH_PATH)).await
}
