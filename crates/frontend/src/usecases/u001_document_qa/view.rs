//! Document Q&A - View Component

use super::upload_panel::UploadPanel;
use super::view_model::DocumentQaVm;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_document_qa::DocumentQa;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn DocumentQaPage() -> impl IntoView {
    let vm = DocumentQaVm::new();

    let question = Memo::new(move |_| vm.state.with(|s| s.question.clone()));
    let answer = Memo::new(move |_| {
        vm.state
            .with(|s| s.answer.clone())
            .filter(|a| !a.is_empty())
    });

    // Кнопка блокируется на время запроса; Enter проходит через ту же проверку
    let submit = move || {
        if !vm.state.with_untracked(|s| s.asking) {
            vm.ask();
        }
    };

    view! {
        <div id=DocumentQa::page_id() class="page" data-page-category="usecase">
            <section class="qa-card" id="try">
                <h2>"Ask your AI"</h2>
                <p class="qa-card__hint">
                    "Type a question related to your uploaded content and get concise answers with references."
                </p>

                <Flex style="gap: 12px;">
                    <input
                        class="qa-input"
                        placeholder="Ask anything about the uploaded document"
                        prop:value=move || question.get()
                        on:input=move |ev| vm.set_question(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.state.with(|s| s.asking))
                        on_click=move |_| submit()
                    >
                        {icon("send")}
                        " "
                        {move || vm.state.with(|s| s.ask_label())}
                    </Button>
                </Flex>

                <Show
                    when=move || answer.get().is_some()
                    fallback=|| {
                        view! {
                            <div class="qa-empty">
                                "No answer yet — ask a question to get started."
                            </div>
                        }
                    }
                >
                    <div class="qa-answer">
                        <h3>"Answer"</h3>
                        <div>{move || answer.get().unwrap_or_default()}</div>
                    </div>
                </Show>
            </section>

            <UploadPanel vm=vm />
        </div>
    }
}
