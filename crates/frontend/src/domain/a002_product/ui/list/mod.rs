use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::{Product, ProductId, ProductPayload};
use contracts::domain::common::AggregateId;
use contracts::shared::form::ImagePolicy;
use contracts::shared::upload::{fallback_image_url, resolve_image_url};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;
use web_sys::{File, HtmlImageElement};

use crate::shared::api::use_api;
use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::config::use_config;
use crate::shared::confirm::{confirm, DELETE_PROMPT};
use crate::shared::crud::{delete_then_refresh, refresh, save_product, SaveTarget};
use crate::shared::dynamic_table::{Column, DynamicTable};
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::resource_modal::{
    ModalHandle, ModalOptions, ReferenceOption, ResourceModal, SaveFuture, SaveHandler,
    SaveRequest,
};

/// Thumbnail, `N/A` without an image. A broken image is swapped once for the
/// configured fallback.
fn image_cell(product: &Product) -> AnyView {
    let config = use_config();
    let Some(src) = resolve_image_url(
        &config.api.base_url,
        &config.uploads.prefix,
        product.image.as_deref(),
    ) else {
        return view! { <span class="table__placeholder">"N/A"</span> }.into_any();
    };
    let fallback = fallback_image_url(
        &config.api.base_url,
        &config.uploads.prefix,
        &config.uploads.fallback_image,
    );

    view! {
        <img
            class="table__thumb"
            src=src
            alt=product.name.clone()
            on:error=move |ev| {
                let img: HtmlImageElement = event_target(&ev);
                if img.src() != fallback {
                    img.set_src(&fallback);
                }
            }
        />
    }
    .into_any()
}

fn columns() -> Vec<Column<Product>> {
    vec![
        Column::new("ID", 70.0, |p| p.id.to_string().into_any()),
        Column::new("Imagen", 90.0, image_cell),
        Column::new("Nombre", 180.0, |p| p.name.clone().into_any()),
        Column::new("Descripción", 240.0, |p| p.description.clone().into_any()),
        Column::new("Categoría", 140.0, |p| p.category_display().into_any()),
        Column::new("Precio", 100.0, |p| format_money(p.price).into_any()),
        Column::new("Costo", 100.0, |p| format_money(p.cost).into_any()),
        Column::new("Stock", 80.0, |p| format_number_int(p.stock).into_any()),
    ]
}

fn category_options(categories: &[Category]) -> Vec<ReferenceOption> {
    categories
        .iter()
        .map(|c| (c.id.as_string(), c.product_type.clone()))
        .collect()
}

#[component]
pub fn ProductList() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let config = use_config();
    let notify = use_notifications();

    let rows = RwSignal::new(Vec::<Product>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(false);
    let create_modal = ModalHandle::<Product>::new();

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match refresh::<Product, _>(&api.get_value()).await {
                Ok(list) => rows.set(list),
                Err(e) => notify.error(format!("Error al cargar productos: {}", e)),
            }
            loading.set(false);
        });
    };

    let load_categories = move || {
        spawn_local(async move {
            match refresh::<Category, _>(&api.get_value()).await {
                Ok(list) => categories.set(list),
                Err(e) => {
                    log::warn!("Category selector left empty: {}", e);
                    notify.warning("Error al cargar las categorías");
                }
            }
        });
    };

    Effect::new(move |_| {
        load();
        load_categories();
    });

    let on_save: SaveHandler<Product> = Arc::new(
        move |request: SaveRequest<ProductId, ProductPayload>, image: Option<File>| -> SaveFuture {
            Box::pin(async move {
                let done = match request.target {
                    SaveTarget::Create => "Producto agregado correctamente",
                    SaveTarget::Update(_) => "Producto actualizado correctamente",
                };
                loading.set(true);
                let result = save_product(
                    &api.get_value(),
                    request.target,
                    request.payload,
                    image.as_ref(),
                )
                .await;
                loading.set(false);
                match result {
                    Ok(list) => {
                        rows.set(list);
                        notify.success(done);
                        Ok(())
                    }
                    Err(e) => {
                        let message = format!("Error: {}", e);
                        notify.error(message.clone());
                        Err(message)
                    }
                }
            })
        },
    );

    let on_delete = Callback::new(move |id: ProductId| {
        spawn_local(async move {
            loading.set(true);
            let result =
                delete_then_refresh::<Product, _>(&api.get_value(), id, || confirm(DELETE_PROMPT))
                    .await;
            loading.set(false);
            match result {
                Ok(Some(list)) => {
                    rows.set(list);
                    notify.success("Producto eliminado correctamente");
                }
                Ok(None) => {}
                Err(e) => notify.error(format!("Error: {}", e)),
            }
        });
    });

    let labelled_rows = Signal::derive(move || {
        let list = rows.get();
        categories.with(|c| {
            list.into_iter()
                .map(|p| p.with_category_label(c))
                .collect::<Vec<_>>()
        })
    });

    let image_policy = if config.products.image_required {
        ImagePolicy::Required
    } else {
        ImagePolicy::Optional
    };

    let modal_options = ModalOptions {
        create_title: "Agregar nuevo producto",
        edit_title: "Editar producto",
        image_policy,
        reference_options: Signal::derive(move || categories.with(|c| category_options(c))),
    };

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Productos"</h1>
                    <Badge>{move || rows.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| create_modal.open_create()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("plus")}
                        " Agregar producto"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            load();
                            load_categories();
                        }
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <DynamicTable
                    rows=labelled_rows
                    columns=columns()
                    on_delete=on_delete
                    edit_modal=modal_options
                    on_save=on_save.clone()
                    loading=loading
                />
            </div>

            <ResourceModal handle=create_modal options=modal_options on_save=on_save />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryId;
    use contracts::domain::common::Status;

    #[test]
    fn test_category_options_use_id_and_type() {
        let cats = vec![Category {
            id: CategoryId(3),
            product_type: "Postres".into(),
            description: String::new(),
            status: Status::Active,
            created_at: String::new(),
        }];
        assert_eq!(category_options(&cats), vec![("3".to_string(), "Postres".to_string())]);
    }
}
