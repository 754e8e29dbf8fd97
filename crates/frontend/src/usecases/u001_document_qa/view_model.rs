//! Document Q&A - View Model

use super::api;
use super::state::{Activity, QaState};
use crate::shared::in_flight::InFlightGuard;
use contracts::shared::file_kind::FileMeta;
use contracts::shared::http_reply::HttpReply;
use contracts::usecases::u001_document_qa::{answer_from_result, summary_from_result, UploadResult};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DocumentQaVm {
    pub state: RwSignal<QaState>,
    /// Сам файл хранится отдельно: `web_sys::File` не Send
    pub file: StoredValue<Option<web_sys::File>, LocalStorage>,
}

impl DocumentQaVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(QaState::default()),
            file: StoredValue::new_local(None),
        }
    }

    pub fn select_file(&self, file: web_sys::File) {
        let meta = FileMeta::new(file.name(), file.type_(), file.size().max(0.0) as u64);
        log::debug!("selected {} ({})", meta.name, meta.media_type);
        self.state.update(|s| s.select_file(meta));
        self.file.set_value(Some(file));
    }

    pub fn set_question(&self, question: String) {
        self.state.update(|s| s.question = question);
    }

    pub fn toggle_full_text(&self) {
        self.state.update(|s| s.toggle_full_text());
    }

    pub fn upload(&self) {
        let Some(file) = self.file.get_value() else {
            return;
        };
        if !self.state.try_update(|s| s.begin_upload()).unwrap_or(false) {
            return;
        }

        let guard = release_guard(self.state, Activity::Upload);
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let _guard = guard;
            log::info!("upload started: {}", file.name());
            let reply = api::upload_file(file).await;
            log_failure("upload", &reply);
            state.try_update(|s| s.finish_upload(UploadResult::from_result(&reply)));
        });
    }

    pub fn ask(&self) {
        let Some(request) = self.state.try_update(|s| s.begin_ask()).flatten() else {
            return;
        };

        let guard = release_guard(self.state, Activity::Ask);
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let _guard = guard;
            log::info!("ask started (doc_id: {:?})", request.doc_id);
            let reply = api::ask(&request).await;
            log_failure("chat", &reply);
            state.try_update(|s| s.finish_ask(answer_from_result(&reply)));
        });
    }

    pub fn summarize(&self) {
        let Some(text) = self.state.try_update(|s| s.begin_summary()).flatten() else {
            return;
        };

        let guard = release_guard(self.state, Activity::Summarize);
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let _guard = guard;
            let reply = api::summarize(&text).await;
            log_failure("summarize", &reply);
            state.try_update(|s| s.finish_summary(summary_from_result(&reply)));
        });
    }
}

/// Флаг уже выставлен в `begin_*`; guard сбросит его на выходе из задачи.
/// Если страница закрыта раньше ответа, сигнала уже нет и сбрасывать нечего.
fn release_guard(state: RwSignal<QaState>, activity: Activity) -> InFlightGuard<impl FnOnce()> {
    InFlightGuard::new(move || {
        state.try_update(|s| s.release(activity));
    })
}

fn log_failure(action: &str, reply: &Result<HttpReply, String>) {
    match reply {
        Ok(reply) if !reply.is_success() => {
            log::warn!("{} failed with HTTP {}", action, reply.status)
        }
        Ok(_) => {}
        Err(e) => log::error!("{} transport error: {}", action, e),
    }
}

impl Default for DocumentQaVm {
    fn default() -> Self {
        Self::new()
    }
}
