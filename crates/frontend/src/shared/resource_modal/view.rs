use super::object_url::{ObjectUrl, PreviewSlot};
use super::state::{ModalMachine, SaveRequest};
use crate::shared::config::{use_config, AppConfig};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::common::{Resource, Status};
use contracts::shared::form::{FormModel, ImagePolicy};
use contracts::shared::metadata::{FieldKind, FieldMetadata};
use contracts::shared::upload::resolve_image_url;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use thaw::*;
use web_sys::{File, HtmlInputElement};

pub type SaveFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Persists a validated request. `Err` carries the message shown in the modal.
pub type SaveHandler<M> = Arc<
    dyn Fn(SaveRequest<<M as Resource>::Id, <M as Resource>::Create>, Option<File>) -> SaveFuture
        + Send
        + Sync,
>;

/// `(value, label)` of a reference selector entry.
pub type ReferenceOption = (String, String);

#[derive(Clone, Copy)]
pub struct ModalOptions {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub image_policy: ImagePolicy,
    pub reference_options: Signal<Vec<ReferenceOption>>,
}

/// Typed handle to a modal's state, shared between the modal and whoever opens it.
pub struct ModalHandle<M: Resource> {
    machine: RwSignal<ModalMachine<M::Id>>,
    _resource: PhantomData<fn() -> M>,
}

impl<M: Resource> Clone for ModalHandle<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Resource> Copy for ModalHandle<M> {}

impl<M: Resource + FormModel> ModalHandle<M> {
    pub fn new() -> Self {
        Self {
            machine: RwSignal::new(ModalMachine::default()),
            _resource: PhantomData,
        }
    }

    pub fn open_create(&self) {
        self.machine.update(|m| m.open_create::<M>());
    }

    pub fn open_edit(&self, record: &M) {
        self.machine.update(|m| m.open_edit(record));
    }
}

impl<M: Resource + FormModel> Default for ModalHandle<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create/edit dialog rendered from `M::fields()`.
#[component]
pub fn ResourceModal<M>(
    handle: ModalHandle<M>,
    options: ModalOptions,
    on_save: SaveHandler<M>,
) -> impl IntoView
where
    M: Resource + FormModel<Payload = <M as Resource>::Create>,
{
    let machine = handle.machine;
    let config = use_config();
    let on_save = StoredValue::new(on_save);
    let pending_file = StoredValue::new_local(None::<File>);
    let preview = StoredValue::new_local(PreviewSlot::default());
    let preview_url = RwSignal::new(None::<String>);

    let release = move || {
        pending_file.set_value(None);
        preview.update_value(|slot| slot.clear());
        preview_url.set(None);
    };

    on_cleanup(move || {
        preview.try_update_value(|slot| slot.clear());
    });

    let saving = Signal::derive(move || machine.with(|m| m.is_saving()));
    let is_open = move || machine.with(|m| m.is_open());

    let close = Callback::new(move |_: ()| {
        if machine.try_update(|m| m.close()).unwrap_or(false) {
            release();
        }
    });

    let submit = move || {
        let Some(request) = machine
            .try_update(|m| m.begin_save::<M>(options.image_policy))
            .flatten()
        else {
            return;
        };
        let file = pending_file.get_value();
        let handler = on_save.get_value();
        spawn_local(async move {
            match handler(request, file).await {
                Ok(()) => {
                    machine.update(|m| m.save_succeeded());
                    release();
                }
                Err(message) => {
                    log::warn!("Save failed, modal stays open: {}", message);
                    machine.update(|m| m.save_failed(message));
                }
            }
        });
    };

    let on_file_selected = Callback::new(move |file: File| {
        let href = preview
            .try_update_value(|slot| slot.install(ObjectUrl::from_blob(&file)))
            .flatten();
        preview_url.set(href);
        machine.update(|m| m.attach_file::<M>(file.name()));
        pending_file.set_value(Some(file));
    });

    let title = move || {
        if machine.with(|m| m.session().is_some_and(|s| s.is_create())) {
            options.create_title
        } else {
            options.edit_title
        }
    };

    view! {
        <Show when=is_open>
            {
                let config = config.clone();
                view! {
                    <ModalFrame on_close=close modal_class="resource-modal".to_string()>
                        <div class="modal-header">
                            <h2 class="modal-title">{title}</h2>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| close.run(())
                                disabled=saving
                            >
                                {icon("x")}
                            </Button>
                        </div>

                        <div class="modal-body">
                            {move || {
                                machine
                                    .with(|m| m.session().and_then(|s| s.save_error.clone()))
                                    .map(|e| view! { <div class="alert alert--error">{e}</div> })
                            }}

                            {M::fields()
                                .iter()
                                .map(|field| {
                                    render_field(
                                        field,
                                        machine,
                                        saving,
                                        options,
                                        preview_url,
                                        on_file_selected,
                                        config.clone(),
                                    )
                                })
                                .collect_view()}
                        </div>

                        <div class="modal-footer">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| close.run(())
                                disabled=saving
                            >
                                "Cancelar"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| submit()
                                disabled=saving
                            >
                                {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                            </Button>
                        </div>
                    </ModalFrame>
                }
            }
        </Show>
    }
}

fn render_field<Id>(
    field: &'static FieldMetadata,
    machine: RwSignal<ModalMachine<Id>>,
    saving: Signal<bool>,
    options: ModalOptions,
    preview_url: RwSignal<Option<String>>,
    on_file_selected: Callback<File>,
    config: AppConfig,
) -> AnyView
where
    Id: Copy + Send + Sync + 'static,
{
    let key = field.key;
    let value = move || machine.with(|m| m.value(key));
    let set = move |v: String| machine.update(|m| m.set_field(key, v));

    let input = match field.kind {
        FieldKind::Text => view! {
            <input
                class="form__input"
                type="text"
                placeholder=field.ui.placeholder.unwrap_or_default()
                prop:value=value
                prop:disabled=move || saving.get()
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                class="form__textarea"
                rows="3"
                placeholder=field.ui.placeholder.unwrap_or_default()
                prop:value=value
                prop:disabled=move || saving.get()
                on:input=move |ev| set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Money | FieldKind::Integer => {
            let step = if field.kind == FieldKind::Money { "0.01" } else { "1" };
            view! {
                <div class="form__adorned">
                    {field.ui.prefix.map(|p| view! { <span class="form__prefix">{p}</span> })}
                    <input
                        class="form__input"
                        type="number"
                        step=step
                        min="0"
                        prop:value=value
                        prop:disabled=move || saving.get()
                        on:input=move |ev| set(event_target_value(&ev))
                    />
                </div>
            }
            .into_any()
        }
        FieldKind::Reference => view! {
            <select
                class="form__select"
                prop:disabled=move || saving.get()
                on:change=move |ev| set(event_target_value(&ev))
            >
                <option value="0" selected=move || value() == "0" || value().is_empty()>
                    "Seleccione una opción"
                </option>
                {move || {
                    let current = value();
                    options
                        .reference_options
                        .get()
                        .into_iter()
                        .map(|(id, label)| {
                            let selected = id == current;
                            view! { <option value=id selected=selected>{label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        FieldKind::Status => view! {
            <select
                class="form__select"
                prop:disabled=move || saving.get()
                on:change=move |ev| set(event_target_value(&ev))
            >
                {Status::all()
                    .into_iter()
                    .map(|status| {
                        let code = status.code().to_string();
                        let code_for_selected = code.clone();
                        view! {
                            <option value=code selected=move || value() == code_for_selected>
                                {status.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Image => {
            let stored = move || {
                machine.with(|m| {
                    m.session().and_then(|s| {
                        resolve_image_url(
                            &config.api.base_url,
                            &config.uploads.prefix,
                            s.draft.stored_image.as_deref(),
                        )
                    })
                })
            };
            view! {
                <div class="form__image">
                    {move || match preview_url.get() {
                        Some(src) => view! {
                            <div class="form__image-preview">
                                <span class="form__hint">"Vista previa:"</span>
                                <img src=src alt="Vista previa" />
                            </div>
                        }
                        .into_any(),
                        None => stored()
                            .map(|src| view! {
                                <div class="form__image-preview">
                                    <span class="form__hint">"Imagen actual:"</span>
                                    <img src=src alt="Imagen actual" />
                                </div>
                            })
                            .into_any(),
                    }}
                    <label class="button button--secondary form__file" class:disabled=move || saving.get()>
                        {icon("upload")}
                        " Seleccionar imagen"
                        <input
                            type="file"
                            accept="image/*"
                            style="display: none;"
                            prop:disabled=move || saving.get()
                            on:change=move |ev| {
                                let input: HtmlInputElement = event_target(&ev);
                                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                                    on_file_selected.run(file);
                                }
                            }
                        />
                    </label>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="form__group">
            <Label>
                {field.ui.label}
                {field.is_required().then_some(" *")}
            </Label>
            {input}
            {field.ui.hint.map(|h| view! { <span class="form__hint">{h}</span> })}
            {move || machine.with(|m| m.error(key)).map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
    .into_any()
}
