use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use leptos::prelude::*;

struct Featured {
    name: &'static str,
    description: &'static str,
    price: &'static str,
}

struct Store {
    name: &'static str,
    address: &'static str,
    hours: &'static str,
    features: &'static [&'static str],
}

const FEATURED: &[Featured] = &[
    Featured {
        name: "Café Colombiano",
        description: "Café de origen único con notas de chocolate y caramelo",
        price: "$3.50",
    },
    Featured {
        name: "Frappuccino",
        description: "Bebida helada con base de café y crema batida",
        price: "$4.75",
    },
    Featured {
        name: "Latte Caramelo",
        description: "Espresso con leche al vapor y jarabe de caramelo",
        price: "$4.25",
    },
];

const STORES: &[Store] = &[
    Store {
        name: "Starbucks Centro Comercial",
        address: "Calle Principal #123",
        hours: "Lun-Dom: 8:00 AM - 10:00 PM",
        features: &["WiFi Gratis", "Drive-thru", "Terraza"],
    },
    Store {
        name: "Starbucks Plaza Mayor",
        address: "Av. Central #456",
        hours: "Lun-Vie: 7:00 AM - 9:00 PM, Sáb-Dom: 8:00 AM - 10:00 PM",
        features: &["WiFi Gratis", "Sala de reuniones", "Estacionamiento"],
    },
    Store {
        name: "Starbucks Zona Norte",
        address: "Blvd. Norte #789",
        hours: "Lun-Dom: 7:30 AM - 11:00 PM",
        features: &["WiFi Gratis", "Autoservicio", "Área de juegos"],
    },
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Coffee,
    Stores,
}

#[component]
fn FeaturedProducts() -> impl IntoView {
    view! {
        <h3 class="info-panel__title">"Productos Destacados"</h3>
        <div class="card-grid">
            {FEATURED
                .iter()
                .map(|item| view! {
                    <div class="info-card">
                        <div class="info-card__header">
                            {icon("coffee")}
                            <span class="info-card__name">{item.name}</span>
                        </div>
                        <p class="info-card__text">{item.description}</p>
                        <strong>{item.price}</strong>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn StoreLocations() -> impl IntoView {
    view! {
        <h3 class="info-panel__title">"Nuestras Tiendas"</h3>
        <div class="card-list">
            {STORES
                .iter()
                .map(|store| view! {
                    <div class="info-card">
                        <div class="info-card__header">
                            <span class="info-card__avatar">{icon("store")}</span>
                            <span class="info-card__name">{store.name}</span>
                        </div>
                        <p class="info-card__text">{store.address}</p>
                        <p class="info-card__text">
                            <strong>"Horario: "</strong>
                            {store.hours}
                        </p>
                        <div class="info-card__chips">
                            {store
                                .features
                                .iter()
                                .map(|f| view! { <span class="chip">{*f}</span> })
                                .collect_view()}
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let section = RwSignal::new(Section::Coffee);

    let tab = move |target: Section, label: &'static str| {
        view! {
            <button
                class=move || {
                    if section.get() == target {
                        "info-panel__tab info-panel__tab--active"
                    } else {
                        "info-panel__tab"
                    }
                }
                on:click=move |_| section.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <PageFrame page_id="sys_home--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page__title page__title--brand">"¡Bienvenido a StarBucks!"</h1>
            </div>
            <div class="page__content">
                <h2 class="info-panel__heading">"Información"</h2>
                <div class="info-panel">
                    <div class="info-panel__tabs">
                        {tab(Section::Coffee, "Coffee")}
                        {tab(Section::Stores, "Tiendas")}
                    </div>
                    <div class="info-panel__body">
                        {move || match section.get() {
                            Section::Coffee => view! { <FeaturedProducts /> }.into_any(),
                            Section::Stores => view! { <StoreLocations /> }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
