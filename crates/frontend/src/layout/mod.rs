pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Каркас страницы
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// |          Footer (backend status)         |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main>{children()}</main>
            <footer::Footer />
        </div>
    }
}
