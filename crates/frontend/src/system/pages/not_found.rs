use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"Página no encontrada"</h1>
            <A href="/">"Volver al inicio"</A>
        </div>
    }
}
