//! Top bar: sidebar toggle and branding.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__logo">{icon("coffee")}</span>
                <span class="top-header__title">"Café Admin"</span>
            </div>
        </div>
    }
}
