use super::view_model::EntityDetailsViewModel;
use contracts::shared::metadata::EntitySchema;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::form::ConfigurableForm;
use crate::shared::icons::icon;
use crate::shared::page_frame::{page_id, PageCategory, PageFrame};
use crate::shared::services::ServicesHandle;

#[component]
pub fn EntityDetails(
    schema: &'static EntitySchema,
    /// `None` opens the create screen
    id: Option<String>,
    services: ServicesHandle,
) -> impl IntoView {
    let vm = EntityDetailsViewModel::new(schema, id);
    vm.load_if_needed(services);

    let cancel = move |_| services.with_value(|s| s.navigate(&schema.list_route()));

    view! {
        <PageFrame page_id=page_id(schema.route_base, PageCategory::Detail) category=PageCategory::Detail>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{vm.title()}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                        on_click=move |_| vm.save_command(services)
                    >
                        {icon("save")}
                        " Save"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=cancel>
                        {icon("cancel")}
                        " Cancel"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || !vm.loading.get()
                    fallback=|| view! { <div class="details__loading">"Loading..."</div> }
                >
                    <ConfigurableForm
                        schema=schema
                        draft=vm.draft
                        errors=vm.errors
                        on_input=Callback::new(move |(field, input)| vm.on_input(field, input))
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
