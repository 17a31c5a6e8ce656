//! Read-only screen of one record

use contracts::shared::metadata::EntitySchema;
use contracts::shared::record::EntityRecord;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::shared::api_utils::api_base;
use crate::shared::form::RecordView;
use crate::shared::icons::icon;
use crate::shared::odata::actions::load_record;
use crate::shared::odata::{EntityClient, GlooTransport};
use crate::shared::page_frame::{page_id, PageCategory, PageFrame};
use crate::shared::services::ServicesHandle;

#[component]
pub fn EntityView(
    schema: &'static EntitySchema,
    id: String,
    services: ServicesHandle,
) -> impl IntoView {
    let record = RwSignal::new(None::<EntityRecord>);

    if let Some(svc) = services.try_get_value() {
        let id = id.clone();
        spawn_local(async move {
            let transport = GlooTransport;
            let client = EntityClient::new(&transport, &api_base(), schema);
            if let Ok(loaded) = load_record(&client, svc.notifier.as_ref(), &id).await {
                record.set(Some(loaded));
            }
        });
    }

    let edit_route = schema.edit_route(&id);
    let edit = move |_| services.with_value(|s| s.navigate(&edit_route));
    let back = move |_| services.with_value(|s| s.navigate(&schema.list_route()));

    view! {
        <PageFrame page_id=page_id(schema.route_base, PageCategory::View) category=PageCategory::View>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("{} {}", schema.entity_name, id)}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=edit>
                        {icon("edit")}
                        " Edit"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=back>
                        {icon("arrow-left")}
                        " Back"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || match record.get() {
                    Some(loaded) => {
                        view! { <RecordView schema=schema record=Signal::stored(loaded)/> }.into_any()
                    }
                    None => view! { <div class="details__loading">"Loading..."</div> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
