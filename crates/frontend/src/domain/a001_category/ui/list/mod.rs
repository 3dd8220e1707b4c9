use contracts::domain::a001_category::{Category, CategoryCreate, CategoryId};
use contracts::domain::common::Status;
use contracts::shared::form::ImagePolicy;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;
use web_sys::File;

use crate::shared::api::use_api;
use crate::shared::confirm::{confirm, DELETE_PROMPT};
use crate::shared::crud::{delete_then_refresh, refresh, save_resource, SaveTarget};
use crate::shared::date_utils::format_datetime;
use crate::shared::dynamic_table::{Column, DynamicTable};
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::resource_modal::{
    ModalHandle, ModalOptions, ResourceModal, SaveFuture, SaveHandler, SaveRequest,
};

fn status_badge(status: Status) -> AnyView {
    let class = match status {
        Status::Active => "badge badge--success",
        Status::Inactive => "badge badge--neutral",
    };
    view! { <span class=class>{status.label()}</span> }.into_any()
}

fn columns() -> Vec<Column<Category>> {
    vec![
        Column::new("#", 70.0, |c| c.id.to_string().into_any()),
        Column::new("Tipo de Producto", 180.0, |c| c.product_type.clone().into_any()),
        Column::new("Descripción", 260.0, |c| c.description.clone().into_any()),
        Column::new("Estado", 110.0, |c| status_badge(c.status)),
        Column::new("Fecha de Creación", 170.0, |c| format_datetime(&c.created_at).into_any()),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let notify = use_notifications();

    let rows = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(false);
    let create_modal = ModalHandle::<Category>::new();

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match refresh::<Category, _>(&api.get_value()).await {
                Ok(list) => rows.set(list),
                Err(e) => notify.error(format!("Error al cargar las categorías: {}", e)),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let on_save: SaveHandler<Category> = Arc::new(
        move |request: SaveRequest<CategoryId, CategoryCreate>,
              _image: Option<File>|
              -> SaveFuture {
            Box::pin(async move {
                let done = match request.target {
                    SaveTarget::Create => "Categoría creada correctamente",
                    SaveTarget::Update(_) => "Categoría actualizada correctamente",
                };
                loading.set(true);
                let result =
                    save_resource::<Category, _>(&api.get_value(), request.target, request.payload)
                        .await;
                loading.set(false);
                match result {
                    Ok(list) => {
                        rows.set(list);
                        notify.success(done);
                        Ok(())
                    }
                    Err(e) => {
                        let message = format!("Error al guardar la categoría: {}", e);
                        notify.error(message.clone());
                        Err(message)
                    }
                }
            })
        },
    );

    let on_delete = Callback::new(move |id: CategoryId| {
        spawn_local(async move {
            loading.set(true);
            let result =
                delete_then_refresh::<Category, _>(&api.get_value(), id, || confirm(DELETE_PROMPT))
                    .await;
            loading.set(false);
            match result {
                Ok(Some(list)) => {
                    rows.set(list);
                    notify.success("Categoría eliminada correctamente");
                }
                Ok(None) => {}
                Err(e) => notify.error(format!("Error al eliminar la categoría: {}", e)),
            }
        });
    });

    let modal_options = ModalOptions {
        create_title: "Nueva categoría",
        edit_title: "Editar categoría",
        image_policy: ImagePolicy::Optional,
        reference_options: Signal::stored(Vec::new()),
    };

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Categorías"</h1>
                    <Badge>{move || rows.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| create_modal.open_create()
                    >
                        {icon("plus")}
                        " Nueva categoría"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <DynamicTable
                    rows=rows
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
