use crate::layout::Shell;
use crate::usecases::u001_document_qa::DocumentQaPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Shell>
            <DocumentQaPage />
        </Shell>
    }
}
