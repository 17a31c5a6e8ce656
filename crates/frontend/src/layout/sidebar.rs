//! Sidebar menu: one link per entity table

use contracts::domain::all_schemas;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__title">"Catalogue"</div>
            <ul class="sidebar__menu">
                {all_schemas()
                    .iter()
                    .map(|schema| {
                        view! {
                            <li class="sidebar__item">
                                <A href=schema.list_route() attr:class="sidebar__link">
                                    {icon(schema.icon.unwrap_or("folder-closed"))}
                                    <span class="sidebar__label">{schema.list_name}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
