use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use leptos::prelude::*;

/// Static profile card.
#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_users--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page__title">"Usuario"</h1>
            </div>
            <div class="page__content">
                <div class="profile-card">
                    <img class="profile-card__photo" src="/licAguilar.jpg" alt="Foto de perfil" />
                    <div class="profile-card__body">
                        <h3 class="profile-card__name">"Lic. Aguilar"</h3>
                        <p class="profile-card__text">
                            <strong>"Edad: "</strong>"129 años"<br />
                            <strong>"Ocupación: "</strong>"Desarrollador Web y Abogado"<br />
                            <strong>"Email: "</strong>"licenciadoAguilar@example.com"<br />
                            <strong>"Dirección: "</strong>"Calle Falsa 123, Ciudad Imaginaria"
                        </p>
                        <a class="button button--primary" href="mailto:licenciadoAguilar@example.com">
                            "Contactar"
                        </a>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
