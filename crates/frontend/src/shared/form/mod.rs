//! Form rendered from an entity's field sections
//!
//! The component owns no state: it shows the draft it is given and reports
//! every control change as a `(field, FieldInput)` pair. Applying the edit
//! (and rejecting it) is the caller's business.

use contracts::shared::form::{Draft, FieldInput};
use contracts::shared::metadata::{EntitySchema, FieldConfig, FieldKind, FieldSection};
use contracts::shared::record::EntityRecord;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::HtmlInputElement;

pub type FieldErrors = BTreeMap<String, String>;

fn field_id(field: &FieldConfig) -> String {
    format!("field-{}", field.key)
}

/// Editable form for create and edit screens
#[component]
pub fn ConfigurableForm(
    schema: &'static EntitySchema,
    #[prop(into)] draft: Signal<Draft>,
    #[prop(into)] errors: Signal<FieldErrors>,
    on_input: Callback<(&'static FieldConfig, FieldInput)>,
) -> impl IntoView {
    let sections: &'static [FieldSection] = schema.sections;
    view! {
        <form class="form" on:submit=|ev| ev.prevent_default()>
            {sections
                .iter()
                .map(|section| {
                    view! {
                        <fieldset class="form__section">
                            <legend class="form__section-title">{section.label}</legend>
                            {section
                                .fields
                                .iter()
                                .map(|field| form_row(schema, field, draft, errors, on_input))
                                .collect_view()}
                        </fieldset>
                    }
                })
                .collect_view()}
        </form>
    }
}

fn form_row(
    schema: &'static EntitySchema,
    field: &'static FieldConfig,
    draft: Signal<Draft>,
    errors: Signal<FieldErrors>,
    on_input: Callback<(&'static FieldConfig, FieldInput)>,
) -> impl IntoView {
    // The draft's mode is fixed for the lifetime of a screen
    let editable = draft.with_untracked(|d| d.is_editable(schema, field));
    let error = move || errors.with(|e| e.get(field.key).cloned());

    view! {
        <div class="form__group">
            <label class="form__label" for=field_id(field)>
                {field.display_label()}
            </label>
            {if editable {
                field_control(field, draft, on_input)
            } else {
                (move || read_only_control(field, draft.with(|d| d.record().clone()))).into_any()
            }}
            {move || error().map(|message| view! { <span class="form__error">{message}</span> })}
        </div>
    }
}

/// Control for one editable field, chosen by kind
fn field_control(
    field: &'static FieldConfig,
    draft: Signal<Draft>,
    on_input: Callback<(&'static FieldConfig, FieldInput)>,
) -> AnyView {
    let placeholder = field.placeholder.unwrap_or_default();
    match field.kind {
        FieldKind::Text | FieldKind::Number | FieldKind::Email => view! {
            <input
                id=field_id(field)
                class="form__input"
                type=field.kind.input_type()
                step=(field.kind == FieldKind::Number).then_some("any")
                placeholder=placeholder
                prop:value=move || draft.with(|d| d.record().text_value(field.key))
                on:change=move |ev| {
                    let input = event_target::<HtmlInputElement>(&ev);
                    // Invalid input stays in the control and out of the draft
                    if input.report_validity() {
                        on_input.run((field, FieldInput::Text(input.value())));
                    }
                }
            />
        }
        .into_any(),
        FieldKind::Date => view! {
            <input
                id=field_id(field)
                class="form__input"
                type=field.kind.input_type()
                step="1"
                prop:value=move || draft.with(|d| d.record().picker_value(field.key))
                on:change=move |ev| {
                    on_input.run((field, FieldInput::DateTime(event_target_value(&ev))));
                }
            />
        }
        .into_any(),
        FieldKind::Boolean => view! {
            <input
                id=field_id(field)
                class="form__checkbox"
                type="checkbox"
                prop:checked=move || draft.with(|d| d.record().checked(field.key))
                on:change=move |ev| {
                    on_input.run((field, FieldInput::Checked(event_target_checked(&ev))));
                }
            />
        }
        .into_any(),
    }
}

fn read_only_control(field: &'static FieldConfig, record: EntityRecord) -> AnyView {
    match field.kind {
        FieldKind::Boolean => view! {
            <input
                id=field_id(field)
                class="form__checkbox"
                type="checkbox"
                disabled=true
                prop:checked=record.checked(field.key)
            />
        }
        .into_any(),
        FieldKind::Text | FieldKind::Number | FieldKind::Email | FieldKind::Date => view! {
            <span id=field_id(field) class="form__value">{record.display(field)}</span>
        }
        .into_any(),
    }
}

/// All sections of a record, read-only
#[component]
pub fn RecordView(
    schema: &'static EntitySchema,
    #[prop(into)] record: Signal<EntityRecord>,
) -> impl IntoView {
    let sections: &'static [FieldSection] = schema.sections;
    view! {
        <div class="form form--readonly">
            {sections
                .iter()
                .map(|section| {
                    view! {
                        <fieldset class="form__section">
                            <legend class="form__section-title">{section.label}</legend>
                            {section
                                .fields
                                .iter()
                                .map(|field| {
                                    view! {
                                        <div class="form__group">
                                            <label class="form__label" for=field_id(field)>
                                                {field.display_label()}
                                            </label>
                                            {move || read_only_control(field, record.get())}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </fieldset>
                    }
                })
                .collect_view()}
        </div>
    }
}
