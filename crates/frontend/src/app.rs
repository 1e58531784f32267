use crate::domain::a001_compte::ui::form::CompteForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <CompteForm />
        </main>
    }
}
