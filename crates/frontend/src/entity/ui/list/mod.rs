//! Paged, sortable, searchable table of one entity

mod state;

pub use state::{cell_text, empty_state_message, ListState};

use contracts::shared::metadata::{ColumnConfig, EntitySchema};
use contracts::shared::query::QueryResult;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

use crate::config::app_config;
use crate::shared::api_utils::api_base;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_indicator, SearchInput};
use crate::shared::odata::actions::delete_record;
use crate::shared::odata::fetcher::fetch_page;
use crate::shared::odata::lookups::{load_lookups, LookupMaps};
use crate::shared::odata::{EntityClient, GlooTransport};
use crate::shared::page_frame::{page_id, PageCategory, PageFrame};
use crate::shared::refresh_guard::RefreshGuard;
use crate::shared::services::ServicesHandle;

#[component]
pub fn EntityList(schema: &'static EntitySchema, services: ServicesHandle) -> impl IntoView {
    let table_config = &app_config().table;
    let state = RwSignal::new(ListState::new(table_config.page_size));
    let result = RwSignal::new(None::<QueryResult>);
    let lookups = RwSignal::new(LookupMaps::new());
    let loading = RwSignal::new(false);
    let guard = StoredValue::new_local(RefreshGuard::new());

    let refresh = move || {
        let request = state.with_untracked(|s| s.to_request());
        let Some(services) = services.try_get_value() else {
            return;
        };
        let guard = guard.get_value();
        let generation = guard.begin();
        loading.set(true);
        spawn_local(async move {
            let transport = GlooTransport;
            let client = EntityClient::new(&transport, &api_base(), schema);
            let outcome = fetch_page(&client, services.notifier.as_ref(), &request).await;
            if !guard.is_current(generation) {
                log::warn!("discarding stale {} refresh", schema.list_name);
                return;
            }
            loading.set(false);
            // A failed refresh was already reported; the last good page stays
            if let Ok(page) = outcome {
                result.set(Some(page));
            }
        });
    };

    // Lookups are loaded once per mount
    if !schema.lookups.is_empty() {
        if let Some(services) = services.try_get_value() {
            spawn_local(async move {
                let maps =
                    load_lookups(&GlooTransport, &api_base(), schema, services.notifier.as_ref())
                        .await;
                lookups.set(maps);
            });
        }
    }

    Effect::new(move |_| {
        state.track();
        refresh();
    });

    let delete = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete {} {}?", schema.entity_name, id))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(services) = services.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let transport = GlooTransport;
            let client = EntityClient::new(&transport, &api_base(), schema);
            if delete_record(&client, services.notifier.as_ref(), &id).await.is_ok() {
                refresh();
            }
        });
    };

    let navigate = move |path: String| services.with_value(|s| s.navigate(&path));

    let total_count = Signal::derive(move || result.with(|r| r.as_ref().map_or(0, |r| r.total_count)));
    let page_size = Signal::derive(move || state.with(|s| s.page_size));
    let total_pages = Signal::derive(move || {
        let size = page_size.get();
        result.with(|r| r.as_ref().map_or(0, |r| r.total_pages(size)))
    });

    view! {
        <PageFrame page_id=page_id(schema.route_base, PageCategory::List) category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(schema.icon.unwrap_or("folder-closed"))}
                    <h1 class="page__title">{schema.list_name}</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=Callback::new(move |term: String| state.update(|s| s.set_search(term)))
                        placeholder=format!("Search by {}...", schema.search_field)
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| navigate(schema.create_route())
                    >
                        {icon("plus")}
                        " Add"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {schema
                                .columns
                                .iter()
                                .map(|column| header_cell(column, state))
                                .collect_view()}
                            <TableHeaderCell min_width=160.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = result.with(|r| r.as_ref().map(|r| r.data.clone()).unwrap_or_default());
                            let maps = lookups.get();
                            rows.into_iter()
                                .map(|record| {
                                    let id = record.id_string(schema.identity_key).unwrap_or_default();
                                    let view_id = id.clone();
                                    let edit_id = id.clone();
                                    let cells = schema
                                        .columns
                                        .iter()
                                        .map(|column| {
                                            let text = cell_text(schema, &record, column, &maps);
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <TableRow>
                                            {cells}
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| navigate(schema.view_route(&view_id))
                                                    >
                                                        {icon("eye")}
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| navigate(schema.edit_route(&edit_id))
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete(id.clone())
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>

                {move || {
                    let loading = loading.get();
                    result
                        .with(|r| empty_state_message(loading, r.as_ref()))
                        .map(|message| view! { <div class="table__empty">{message}</div> })
                }}

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=total_pages
                    total_count=total_count
                    page_size=page_size
                    on_page_change=Callback::new(move |page: usize| state.update(|s| s.page = page))
                    on_page_size_change=Callback::new(move |size: usize| state.update(|s| s.set_page_size(size)))
                    page_size_options=table_config.page_size_options.clone()
                />
            </div>
        </PageFrame>
    }
}

fn header_cell(column: &'static ColumnConfig, state: RwSignal<ListState>) -> impl IntoView {
    if !column.sortable {
        return view! { <TableHeaderCell>{column.title}</TableHeaderCell> }.into_any();
    }
    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                on:click=move |_| state.update(|s| s.toggle_sort(column.field))
            >
                {column.title}
                {move || state.with(|s| sort_indicator(s.sorted(), column.field))}
            </div>
        </TableHeaderCell>
    }
    .into_any()
}
