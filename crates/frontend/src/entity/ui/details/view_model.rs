use contracts::shared::form::{Draft, EditOutcome, FieldInput, FormMode};
use contracts::shared::metadata::{EntitySchema, FieldConfig};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::api_base;
use crate::shared::form::FieldErrors;
use crate::shared::odata::actions::{load_record, submit_draft};
use crate::shared::odata::{EntityClient, GlooTransport};
use crate::shared::services::ServicesHandle;

/// Apply one control event to the draft and keep the field's error in sync
pub fn apply_edit(
    schema: &EntitySchema,
    draft: &mut Draft,
    errors: &mut FieldErrors,
    field: &FieldConfig,
    input: FieldInput,
) -> EditOutcome {
    let outcome = draft.apply(schema, field, input);
    match &outcome {
        EditOutcome::Accepted => {
            errors.remove(field.key);
        }
        EditOutcome::Rejected(message) => {
            log::debug!("{} rejected: {}", field.key, message);
            errors.insert(field.key.to_string(), message.clone());
        }
        EditOutcome::ReadOnly => {}
    }
    outcome
}

/// State and commands of the create/edit screen
#[derive(Clone, Copy)]
pub struct EntityDetailsViewModel {
    pub schema: &'static EntitySchema,
    pub draft: RwSignal<Draft>,
    pub errors: RwSignal<FieldErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    id: StoredValue<Option<String>>,
}

impl EntityDetailsViewModel {
    pub fn new(schema: &'static EntitySchema, id: Option<String>) -> Self {
        let draft = match id {
            Some(_) => Draft::new(Default::default(), FormMode::Edit),
            None => Draft::for_create(),
        };
        Self {
            schema,
            draft: RwSignal::new(draft),
            errors: RwSignal::new(FieldErrors::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            id: StoredValue::new(id),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(|id| id.is_some())
    }

    pub fn title(&self) -> String {
        if self.is_edit_mode() {
            format!("Edit {}", self.schema.entity_name)
        } else {
            format!("New {}", self.schema.entity_name)
        }
    }

    pub fn on_input(&self, field: &'static FieldConfig, input: FieldInput) {
        let schema = self.schema;
        let errors = self.errors;
        self.draft.update(|draft| {
            errors.update(|errors| {
                apply_edit(schema, draft, errors, field, input);
            });
        });
    }

    /// Load the record being edited; the create screen has nothing to load
    pub fn load_if_needed(&self, services: ServicesHandle) {
        let Some(id) = self.id.get_value() else {
            return;
        };
        let Some(services) = services.try_get_value() else {
            return;
        };
        let (schema, draft, loading) = (self.schema, self.draft, self.loading);
        loading.set(true);
        spawn_local(async move {
            let transport = GlooTransport;
            let client = EntityClient::new(&transport, &api_base(), schema);
            if let Ok(record) = load_record(&client, services.notifier.as_ref(), &id).await {
                draft.update(|d| d.reset(record));
            }
            loading.set(false);
        });
    }

    /// Submit the draft. On failure the draft stays as the user left it.
    pub fn save_command(&self, services: ServicesHandle) {
        if self.saving.get_untracked() {
            return;
        }
        let Some(services) = services.try_get_value() else {
            return;
        };
        let (schema, saving) = (self.schema, self.saving);
        let draft = self.draft.get_untracked();
        let id = self.id.get_value();
        saving.set(true);
        spawn_local(async move {
            let transport = GlooTransport;
            let client = EntityClient::new(&transport, &api_base(), schema);
            // The user has already been notified of a failure
            if let Err(e) = submit_draft(&client, &services, id.as_deref(), &draft).await {
                log::debug!("{} not saved: {}", schema.entity_name, e);
            }
            saving.set(false);
        });
    }
}
