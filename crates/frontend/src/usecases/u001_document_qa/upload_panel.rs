use super::view_model::DocumentQaVm;
use crate::shared::icons::icon;
use contracts::shared::file_kind::format_size;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Боковая панель: выбор/перетаскивание файла, загрузка, превью текста
#[component]
#[allow(non_snake_case)]
pub fn UploadPanel(vm: DocumentQaVm) -> impl IntoView {
    let selected = Memo::new(move |_| vm.state.with(|s| s.file.clone()));
    let upload_result = Memo::new(move |_| vm.state.with(|s| s.upload_result.clone()));
    let ready_for_chat = Memo::new(move |_| vm.state.with(|s| s.ready_for_chat()));
    let summary = Memo::new(move |_| {
        vm.state
            .with(|s| s.summary.clone())
            .filter(|text| !text.is_empty())
    });

    view! {
        <aside class="qa-card">
            <h2>"Upload"</h2>
            <p class="qa-card__hint">
                "Drop a file (PDF, audio, video) to make it available for querying."
            </p>

            <div
                class="qa-dropzone"
                on:dragover=|ev: web_sys::DragEvent| ev.prevent_default()
                on:drop=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    if let Some(file) = ev
                        .data_transfer()
                        .and_then(|dt| dt.files())
                        .and_then(|files| files.get(0))
                    {
                        vm.select_file(file);
                    }
                }
            >
                <Flex align=FlexAlign::Center style="gap: 12px;">
                    <input
                        type="file"
                        id="file"
                        accept="application/pdf,audio/*,video/*"
                        style="flex: 1; min-width: 0; font-size: 14px;"
                        on:change=move |ev| {
                            let Some(input) = ev
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            else {
                                return;
                            };
                            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                                vm.select_file(file);
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.state.with(|s| s.upload_disabled()))
                        on_click=move |_| vm.upload()
                    >
                        {icon("upload")}
                        " "
                        {move || vm.state.with(|s| s.upload_label())}
                    </Button>
                </Flex>

                <div class="qa-small">
                    "Supported: PDF, audio (mp3/wav), video. Or drag & drop a file here."
                </div>

                {move || {
                    selected
                        .get()
                        .map(|file| {
                            let status = if file.is_supported() {
                                view! { <span class="qa-ok">"(OK)"</span> }.into_any()
                            } else {
                                view! { <span class="qa-error">"(Unsupported)"</span> }.into_any()
                            };
                            view! {
                                <div style="font-size: 14px;">
                                    <strong>"Selected: "</strong>
                                    {file.name.clone()}
                                    " "
                                    <span class="qa-small">{format_size(file.size)}</span>
                                    " "
                                    {status}
                                </div>
                            }
                        })
                }}

                {move || {
                    upload_result
                        .get()
                        .map(|result| {
                            if let Some(error) = result.error() {
                                return view! {
                                    <div class="qa-error" style="font-size: 14px;">{error.to_string()}</div>
                                }
                                    .into_any();
                            }
                            let doc = result.document().cloned().unwrap_or_default();
                            view! {
                                <Flex
                                    justify=FlexJustify::SpaceBetween
                                    align=FlexAlign::Center
                                    style="font-size: 14px;"
                                >
                                    <div>
                                        {icon("document")}
                                        <strong>" Uploaded: "</strong>
                                        {doc.filename.unwrap_or_default()}
                                        <span class="qa-small">
                                            {format!(" (id: {})", doc.id.unwrap_or_default())}
                                        </span>
                                    </div>
                                    <div class="qa-small">
                                        {move || if ready_for_chat.get() { "Ready for chat" } else { "" }}
                                    </div>
                                </Flex>
                            }
                                .into_any()
                        })
                }}
            </div>

            <Show when=move || vm.state.with(|s| !s.extracted_text.is_empty())>
                <div class="qa-preview">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::FlexStart>
                        <strong>"Extracted text preview"</strong>
                        <Flex style="gap: 8px;">
                            <button class="qa-link" on:click=move |_| vm.toggle_full_text()>
                                {move || vm.state.with(|s| s.toggle_label())}
                            </button>
                            <button
                                class="qa-link"
                                disabled=move || vm.state.with(|s| s.summarizing)
                                on:click=move |_| vm.summarize()
                            >
                                {icon("summary")}
                                " "
                                {move || vm.state.with(|s| s.summarize_label())}
                            </button>
                        </Flex>
                    </Flex>
                    <div class="qa-preview__text">
                        {move || vm.state.with(|s| s.preview().into_owned())}
                    </div>
                    {move || {
                        summary
                            .get()
                            .map(|text| {
                                view! {
                                    <div class="qa-answer">
                                        <h3>"Summary"</h3>
                                        <div>{text}</div>
                                    </div>
                                }
                            })
                    }}
                </div>
            </Show>

            <div class="qa-small" style="margin-top: 16px;">
                "Tip: For best results, upload the main document before asking questions."
            </div>
        </aside>
    }
}
