//! Client routes
//!
//! `/{entity}` list, `/{entity}/create`, `/{entity}/view/{id}` and
//! `/{entity}/edit/{id}`, where `{entity}` is a schema's route segment.

use contracts::domain::{all_schemas, schema_by_route};
use contracts::shared::metadata::EntitySchema;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::entity::ui::details::EntityDetails;
use crate::entity::ui::list::EntityList;
use crate::entity::ui::view::EntityView;
use crate::layout::Shell;
use crate::shared::components::ToastService;
use crate::shared::services::{AppServices, RouterNavigator, ServicesHandle};

/// Which screen a route shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    List,
    Create,
    View,
    Edit,
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <AppFrame />
        </Router>
    }
}

/// Everything below the router: services need `use_navigate`
#[component]
fn AppFrame() -> impl IntoView {
    let toasts = ToastService::new();
    let services: ServicesHandle =
        StoredValue::new_local(AppServices::new(toasts, RouterNavigator::from_router()));

    view! {
        <Shell toasts=toasts>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/:entity") view=move || entity_screen(Screen::List, services) />
                <Route
                    path=path!("/:entity/create")
                    view=move || entity_screen(Screen::Create, services)
                />
                <Route
                    path=path!("/:entity/view/:id")
                    view=move || entity_screen(Screen::View, services)
                />
                <Route
                    path=path!("/:entity/edit/:id")
                    view=move || entity_screen(Screen::Edit, services)
                />
            </Routes>
        </Shell>
    }
}

/// Resolve the route params and mount the screen; a param change remounts it
fn entity_screen(screen: Screen, services: ServicesHandle) -> impl IntoView {
    let params = use_params_map();
    move || {
        let (entity, id) = params.with(|p| (p.get("entity"), p.get("id")));
        let Some(schema) = entity.as_deref().and_then(schema_by_route) else {
            return view! { <NotFound /> }.into_any();
        };
        mount_screen(screen, schema, id, services)
    }
}

fn mount_screen(
    screen: Screen,
    schema: &'static EntitySchema,
    id: Option<String>,
    services: ServicesHandle,
) -> AnyView {
    match (screen, id) {
        (Screen::List, _) => view! { <EntityList schema=schema services=services /> }.into_any(),
        (Screen::Create, _) => {
            view! { <EntityDetails schema=schema id=None services=services /> }.into_any()
        }
        (Screen::Edit, Some(id)) => {
            view! { <EntityDetails schema=schema id=Some(id) services=services /> }.into_any()
        }
        (Screen::View, Some(id)) => {
            view! { <EntityView schema=schema id=id services=services /> }.into_any()
        }
        (Screen::Edit | Screen::View, None) => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="page page--home">
            <h1 class="page__title">"Catalogue"</h1>
            <ul class="home__links">
                {all_schemas()
                    .iter()
                    .map(|schema| {
                        view! {
                            <li>
                                <A href=schema.list_route()>{schema.list_name}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"Page not found"</h1>
            <A href="/">"Back to the catalogue"</A>
        </div>
    }
}
