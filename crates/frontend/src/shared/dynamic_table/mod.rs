//! Generic paginated table for any [`Resource`].
//!
//! Rows come from the owning page. The table keeps its own copy, refreshed on
//! every change of the incoming signal, and renders the page window of it.
//! An actions column is appended to every row: the gear opens the hosted
//! edit modal seeded with the row, the trash button hands the id back to the
//! page.

pub mod pagination;

use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::resource_modal::{ModalHandle, ModalOptions, ResourceModal, SaveHandler};
use contracts::domain::common::{AggregateId, Resource};
use contracts::shared::form::FormModel;
use leptos::prelude::*;
use pagination::{page_window, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use std::collections::HashSet;
use thaw::*;

/// One data column: header text, minimum width in px and a cell renderer.
pub struct Column<R> {
    pub header: &'static str,
    pub min_width: f64,
    pub cell: fn(&R) -> AnyView,
}

impl<R> Column<R> {
    pub const fn new(header: &'static str, min_width: f64, cell: fn(&R) -> AnyView) -> Self {
        Self {
            header,
            min_width,
            cell,
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

#[component]
pub fn DynamicTable<R>(
    #[prop(into)] rows: Signal<Vec<R>>,
    columns: Vec<Column<R>>,
    on_delete: Callback<R::Id>,
    /// Options of the hosted edit modal.
    edit_modal: ModalOptions,
    on_save: SaveHandler<R>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView
where
    R: Resource + FormModel<Payload = <R as Resource>::Create>,
{
    let local_rows = RwSignal::new(Vec::<R>::new());
    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(DEFAULT_PAGE_SIZE);
    let selected = RwSignal::new(HashSet::<String>::new());
    let columns = StoredValue::new(columns);
    let handle = ModalHandle::<R>::new();

    Effect::new(move |_| {
        let incoming = rows.get();
        let ids: HashSet<String> = incoming.iter().map(|r| r.id().as_string()).collect();
        let window = page_window(incoming.len(), page.get_untracked(), page_size.get_untracked());
        page.set(window.page);
        selected.update(|s| s.retain(|id| ids.contains(id)));
        local_rows.set(incoming);
    });

    let window = Memo::new(move |_| {
        local_rows.with(|r| page_window(r.len(), page.get(), page_size.get()))
    });

    let visible = Memo::new(move |_| {
        let w = window.get();
        local_rows.with(|r| r.get(w.start..w.end).map(<[R]>::to_vec).unwrap_or_default())
    });

    let visible_ids = Signal::derive(move || {
        visible.with(|rows| rows.iter().map(|r| r.id().as_string()).collect::<Vec<_>>())
    });

    let toggle_all = move |check_all: bool| {
        let ids = visible_ids.get_untracked();
        selected.update(|s| {
            for id in ids {
                if check_all {
                    s.insert(id);
                } else {
                    s.remove(&id);
                }
            }
        });
    };

    let toggle_one = move |(id, checked): (String, bool)| {
        selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let change_page_size = move |size: usize| {
        page_size.set(size);
        page.set(0);
    };

    view! {
        <div class="dynamic-table">
            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
                        {title.map(|t| view! { <span class="filter-panel__title">{t}</span> })}
                        <Show when=move || loading.get()>
                            <Spinner size=SpinnerSize::Small />
                        </Show>
                    </div>
                    <div class="filter-panel-header__center">
                        <PaginationControls
                            current_page=Signal::derive(move || window.get().page)
                            total_pages=Signal::derive(move || window.get().total_pages)
                            total_count=Signal::derive(move || local_rows.with(Vec::len))
                            page_size=page_size
                            on_page_change=Callback::new(move |p: usize| page.set(p))
                            on_page_size_change=Callback::new(change_page_size)
                            page_size_options=&PAGE_SIZE_OPTIONS
                        />
                    </div>
                    <div class="filter-panel-header__right">
                        {move || {
                            let count = selected.with(HashSet::len);
                            (count > 0).then(|| view! {
                                <span class="dynamic-table__selection">
                                    {format!("Seleccionados: {}", count)}
                                </span>
                            })
                        }}
                    </div>
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                ids=visible_ids
                                selected=selected
                                on_change=Callback::new(toggle_all)
                            />
                            {columns
                                .get_value()
                                .into_iter()
                                .map(|col| view! {
                                    <TableHeaderCell resizable=false min_width=col.min_width class="resizable">
                                        {col.header}
                                    </TableHeaderCell>
                                })
                                .collect_view()}
                            <TableHeaderCell resizable=false min_width=110.0>
                                "Acciones"
                            </TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || {
                            let rows = visible.get();
                            if rows.is_empty() {
                                let span = columns.with_value(Vec::len) + 2;
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=span.to_string()>
                                            <TableCellLayout>
                                                <span class="dynamic-table__empty">"Sin registros"</span>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|row| {
                                    let row_id = row.id();
                                    let cells = columns
                                        .get_value()
                                        .into_iter()
                                        .map(|col| {
                                            let row = row.clone();
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{(col.cell)(&row)}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=row_id.as_string()
                                                selected=selected
                                                on_change=Callback::new(toggle_one)
                                            />
                                            {cells}
                                            <TableCell>
                                                <div class="dynamic-table__actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        attr:title="Editar"
                                                        on_click=move |_| handle.open_edit(&row)
                                                    >
                                                        {icon("settings")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        attr:title="Eliminar"
                                                        on_click=move |_| on_delete.run(row_id)
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <ResourceModal handle=handle options=edit_modal on_save=on_save />
        </div>
    }
}
