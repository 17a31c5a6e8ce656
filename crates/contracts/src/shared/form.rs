//! Draft records and write payloads for configurable forms
//!
//! A [`Draft`] is the locally edited copy of a record. Control events are
//! turned into [`FieldInput`]s and applied through the field's kind; the
//! result is merged by key and never touches unrelated fields.

use serde_json::{Map, Number, Value};

use super::datetime;
use super::metadata::{native_validity, EntitySchema, FieldConfig, FieldKind};
use super::record::EntityRecord;

/// Raw value coming out of a form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Text-like input (text, number, email)
    Text(String),
    /// Checkbox state
    Checked(bool),
    /// `datetime-local` picker value
    DateTime(String),
}

/// What happened to an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Accepted,
    /// Failed validation; the draft is unchanged
    Rejected(String),
    /// Field is not editable in this mode; the draft is unchanged
    ReadOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
    View,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    record: EntityRecord,
    mode: FormMode,
}

impl Draft {
    pub fn new(record: EntityRecord, mode: FormMode) -> Self {
        Self { record, mode }
    }

    /// Empty draft for the create screen
    pub fn for_create() -> Self {
        Self::new(EntityRecord::new(), FormMode::Create)
    }

    pub fn record(&self) -> &EntityRecord {
        &self.record
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Replace the whole record, e.g. when the load completes
    pub fn reset(&mut self, record: EntityRecord) {
        self.record = record;
    }

    pub fn is_editable(&self, schema: &EntitySchema, field: &FieldConfig) -> bool {
        match self.mode {
            FormMode::View => false,
            FormMode::Edit => !schema.is_identity(field.key),
            FormMode::Create => {
                !schema.is_identity(field.key) || !schema.identity_server_generated
            }
        }
    }

    /// Merge one value by key, preserving all other keys
    pub fn merge(&mut self, key: &str, value: Value) {
        self.record.set(key, value);
    }

    /// Apply a control event according to the field's kind
    pub fn apply(
        &mut self,
        schema: &EntitySchema,
        field: &FieldConfig,
        input: FieldInput,
    ) -> EditOutcome {
        if !self.is_editable(schema, field) {
            return EditOutcome::ReadOnly;
        }

        let value = match (field.kind, input) {
            (FieldKind::Date, FieldInput::DateTime(raw)) => {
                if raw.trim().is_empty() {
                    Value::Null
                } else {
                    match datetime::from_picker_value(&raw) {
                        Some(wire) => Value::String(wire),
                        None => {
                            return EditOutcome::Rejected(format!("'{}' is not a valid date", raw))
                        }
                    }
                }
            }
            (FieldKind::Boolean, FieldInput::Checked(checked)) => Value::Bool(checked),
            (FieldKind::Number, FieldInput::Text(raw)) => {
                if let Err(e) = native_validity(FieldKind::Number, &raw) {
                    return EditOutcome::Rejected(e);
                }
                parse_number(&raw)
            }
            (kind @ (FieldKind::Text | FieldKind::Email), FieldInput::Text(raw)) => {
                if let Err(e) = native_validity(kind, &raw) {
                    return EditOutcome::Rejected(e);
                }
                Value::String(raw)
            }
            (kind, input) => {
                return EditOutcome::Rejected(format!(
                    "{} field cannot take {:?}",
                    kind.as_str(),
                    input
                ))
            }
        };

        self.merge(field.key, value);
        EditOutcome::Accepted
    }
}

/// Payload of a partial update: identity and computed fields removed,
/// integer fields coerced.
pub fn build_patch(schema: &EntitySchema, draft: &Draft) -> Map<String, Value> {
    let mut payload = draft.record().as_map().clone();
    payload.remove(schema.identity_key);
    finish_payload(schema, payload)
}

/// Payload of a create request. A client-assigned identity is kept.
pub fn build_create(schema: &EntitySchema, draft: &Draft) -> Map<String, Value> {
    let mut payload = draft.record().as_map().clone();
    if schema.identity_server_generated {
        payload.remove(schema.identity_key);
    }
    finish_payload(schema, payload)
}

fn finish_payload(schema: &EntitySchema, mut payload: Map<String, Value>) -> Map<String, Value> {
    for key in schema.patch_excluded {
        payload.remove(*key);
    }
    for key in schema.integer_fields {
        if let Some(value) = payload.get_mut(*key) {
            *value = coerce_integer(value);
        }
    }
    payload
}

/// Integer coercion with `parseInt` semantics: the leading integer of a
/// string, a number truncated toward zero, `null` when there is none.
pub fn coerce_integer(value: &Value) -> Value {
    match value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Value::Number(n.clone())
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| float_to_value(f.trunc()))
                    .unwrap_or(Value::Null)
            }
        }
        Value::String(s) => leading_integer(s),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Value::Null,
    }
}

fn leading_integer(raw: &str) -> Value {
    let s = raw.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Value::Null;
    }
    let literal = format!("{}{}", sign, &digits[..end]);
    match literal.parse::<i64>() {
        Ok(i) => Value::Number(i.into()),
        Err(_) => literal
            .parse::<f64>()
            .map(float_to_value)
            .unwrap_or(Value::Null),
    }
}

fn float_to_value(f: f64) -> Value {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Value::Number((f as i64).into())
    } else {
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
}

fn parse_number(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Number(i.into());
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::FieldSection;
    use serde_json::json;

    const FIELDS: &[FieldConfig] = &[
        FieldConfig::new("Vendor", "Vendor", FieldKind::Text),
        FieldConfig::new("VendorName", "Name", FieldKind::Text).required(),
        FieldConfig::new("Email", "Email", FieldKind::Email),
        FieldConfig::new("PricePerUnit", "Price per unit", FieldKind::Number),
        FieldConfig::new("PurchaseDate", "Purchase date", FieldKind::Date),
        FieldConfig::new("IsActive", "Active", FieldKind::Boolean),
    ];
    const SECTIONS: &[FieldSection] = &[FieldSection {
        label: "Vendor",
        fields: FIELDS,
    }];
    const SCHEMA: EntitySchema = EntitySchema {
        entity_name: "Vendor",
        list_name: "Vendors",
        collection_path: "/Vendors",
        route_base: "/vendors",
        identity_key: "Vendor",
        identity_server_generated: false,
        search_field: "VendorName",
        sections: SECTIONS,
        columns: &[],
        lookups: &[],
        integer_fields: &["PricePerUnit", "ProductUnitsPurchased"],
        patch_excluded: &["TotalUnitsPurchasedPrice"],
        icon: None,
    };

    fn field(key: &str) -> &'static FieldConfig {
        SCHEMA.field(key).unwrap()
    }

    fn loaded() -> Draft {
        let record = serde_json::from_value(json!({
            "Vendor": "V-1",
            "VendorName": "Acme",
            "Email": "sales@acme.io",
            "PricePerUnit": 10,
            "ProductUnitsPurchased": "7.9",
            "TotalUnitsPurchasedPrice": 70,
            "PurchaseDate": "2024-01-02T03:04:05Z",
            "Extra": { "nested": true }
        }))
        .unwrap();
        Draft::new(record, FormMode::Edit)
    }

    #[test]
    fn test_identity_is_read_only_in_edit() {
        let mut draft = loaded();
        let outcome = draft.apply(&SCHEMA, field("Vendor"), FieldInput::Text("V-2".into()));
        assert_eq!(outcome, EditOutcome::ReadOnly);
        assert_eq!(draft.record().get("Vendor"), Some(&json!("V-1")));
    }

    #[test]
    fn test_identity_editable_on_create_when_client_assigned() {
        let mut draft = Draft::for_create();
        let outcome = draft.apply(&SCHEMA, field("Vendor"), FieldInput::Text("V-9".into()));
        assert_eq!(outcome, EditOutcome::Accepted);
        let payload = build_create(&SCHEMA, &draft);
        assert_eq!(payload.get("Vendor"), Some(&json!("V-9")));
    }

    #[test]
    fn test_text_edit_merges_without_touching_other_keys() {
        let before = loaded();
        let mut draft = before.clone();
        let outcome = draft.apply(&SCHEMA, field("VendorName"), FieldInput::Text("Acme Ltd".into()));
        assert_eq!(outcome, EditOutcome::Accepted);
        for (key, value) in before.record().as_map() {
            if key != "VendorName" {
                assert_eq!(draft.record().get(key), Some(value), "{}", key);
            }
        }
        assert_eq!(draft.record().get("VendorName"), Some(&json!("Acme Ltd")));
    }

    #[test]
    fn test_invalid_native_input_is_discarded() {
        let mut draft = loaded();
        let outcome = draft.apply(&SCHEMA, field("Email"), FieldInput::Text("not-an-email".into()));
        assert!(matches!(outcome, EditOutcome::Rejected(_)));
        assert_eq!(draft.record().get("Email"), Some(&json!("sales@acme.io")));

        let outcome = draft.apply(&SCHEMA, field("PricePerUnit"), FieldInput::Text("1e".into()));
        assert!(matches!(outcome, EditOutcome::Rejected(_)));
        assert_eq!(draft.record().get("PricePerUnit"), Some(&json!(10)));
    }

    #[test]
    fn test_number_stored_as_number() {
        let mut draft = loaded();
        draft.apply(&SCHEMA, field("PricePerUnit"), FieldInput::Text("12.5".into()));
        assert_eq!(draft.record().get("PricePerUnit"), Some(&json!(12.5)));
        draft.apply(&SCHEMA, field("PricePerUnit"), FieldInput::Text("".into()));
        assert_eq!(draft.record().get("PricePerUnit"), Some(&Value::Null));
    }

    #[test]
    fn test_date_edit_normalized_to_utc() {
        let mut draft = loaded();
        let outcome = draft.apply(
            &SCHEMA,
            field("PurchaseDate"),
            FieldInput::DateTime("2024-06-30T18:45".into()),
        );
        assert_eq!(outcome, EditOutcome::Accepted);
        assert_eq!(draft.record().get("PurchaseDate"), Some(&json!("2024-06-30T18:45:00Z")));
        assert_eq!(draft.record().picker_value("PurchaseDate"), "2024-06-30T18:45:00");
    }

    #[test]
    fn test_checkbox_defaults_and_toggles() {
        let mut draft = loaded();
        assert!(!draft.record().checked("IsActive"));
        draft.apply(&SCHEMA, field("IsActive"), FieldInput::Checked(true));
        assert_eq!(draft.record().get("IsActive"), Some(&json!(true)));
    }

    #[test]
    fn test_mismatched_input_rejected() {
        let mut draft = loaded();
        let outcome = draft.apply(&SCHEMA, field("IsActive"), FieldInput::Text("yes".into()));
        assert!(matches!(outcome, EditOutcome::Rejected(_)));
    }

    #[test]
    fn test_view_mode_is_read_only() {
        let mut draft = Draft::new(EntityRecord::new(), FormMode::View);
        let outcome = draft.apply(&SCHEMA, field("VendorName"), FieldInput::Text("x".into()));
        assert_eq!(outcome, EditOutcome::ReadOnly);
    }

    #[test]
    fn test_patch_payload() {
        let payload = build_patch(&SCHEMA, &loaded());
        assert!(!payload.contains_key("Vendor"));
        assert!(!payload.contains_key("TotalUnitsPurchasedPrice"));
        assert_eq!(payload.get("ProductUnitsPurchased"), Some(&json!(7)));
        assert_eq!(payload.get("PricePerUnit"), Some(&json!(10)));
        assert_eq!(payload.get("Extra"), Some(&json!({ "nested": true })));
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce_integer(&json!("42abc")), json!(42));
        assert_eq!(coerce_integer(&json!("  -3")), json!(-3));
        assert_eq!(coerce_integer(&json!(9.99)), json!(9));
        assert_eq!(coerce_integer(&json!(-9.99)), json!(-9));
        assert_eq!(coerce_integer(&json!("abc")), Value::Null);
        assert_eq!(coerce_integer(&json!("")), Value::Null);
        assert_eq!(coerce_integer(&json!(true)), Value::Null);
    }

    #[test]
    fn test_edit_submit_reload_changes_one_field() {
        let original = loaded();
        let mut draft = original.clone();
        draft.apply(&SCHEMA, field("Email"), FieldInput::Text("info@acme.io".into()));

        // Server applies the partial update on top of its stored record.
        let mut stored = original.record().clone();
        stored.set("ProductUnitsPurchased", json!(7));
        let stored_before = stored.clone();
        for (key, value) in build_patch(&SCHEMA, &draft) {
            stored.set(key, value);
        }

        for (key, value) in stored_before.as_map() {
            if key == "Email" {
                assert_eq!(stored.get(key), Some(&json!("info@acme.io")));
            } else {
                assert_eq!(stored.get(key), Some(value), "{}", key);
            }
        }
    }
}
