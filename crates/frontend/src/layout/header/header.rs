use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_document_qa::DocumentQa;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <h1 class="header__title">{DocumentQa::display_name()}</h1>
                <p class="header__subtitle">{DocumentQa::description()}</p>
            </div>
            <nav class="header__nav">
                <a href="#features">"Features"</a>
                <a href="#try">"Try"</a>
            </nav>
        </header>
    }
}
