//! Core configuration types for entity screens
//!
//! All types use 'static lifetimes: schemas are compile-time constants.

use super::field_type::FieldKind;

// ============================================================================
// Entity-level configuration
// ============================================================================

/// Static description of one entity collection and its screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    /// Singular name used in messages ("Vendor")
    pub entity_name: &'static str,
    /// Plural name used in headings and messages ("Vendors")
    pub list_name: &'static str,
    /// Path of the collection on the remote API ("/Vendors")
    pub collection_path: &'static str,
    /// Client route prefix ("/vendors")
    pub route_base: &'static str,
    pub identity_key: &'static str,
    /// Identity is assigned by the server on create
    pub identity_server_generated: bool,
    /// Field used for the `contains` search filter
    pub search_field: &'static str,
    pub sections: &'static [FieldSection],
    pub columns: &'static [ColumnConfig],
    pub lookups: &'static [LookupSpec],
    /// Fields coerced to integers before a write
    pub integer_fields: &'static [&'static str],
    /// Computed fields never sent back to the server
    pub patch_excluded: &'static [&'static str],
    pub icon: Option<&'static str>,
}

impl EntitySchema {
    /// All configured form fields in section order
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldConfig> {
        let sections: &'static [FieldSection] = self.sections;
        sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldConfig> {
        self.fields().find(|f| f.key == key)
    }

    pub fn is_identity(&self, key: &str) -> bool {
        self.identity_key == key
    }

    /// Lookup that feeds the given table column, if any
    pub fn lookup_for_column(&self, column: &str) -> Option<&'static LookupSpec> {
        let lookups: &'static [LookupSpec] = self.lookups;
        lookups.iter().find(|l| l.column == column)
    }

    pub fn list_route(&self) -> String {
        self.route_base.to_string()
    }

    pub fn create_route(&self) -> String {
        format!("{}/create", self.route_base)
    }

    pub fn view_route(&self, id: &str) -> String {
        format!("{}/view/{}", self.route_base, id)
    }

    pub fn edit_route(&self, id: &str) -> String {
        format!("{}/edit/{}", self.route_base, id)
    }
}

/// Labeled group of fields shown together on a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSection {
    pub label: &'static str,
    pub fields: &'static [FieldConfig],
}

// ============================================================================
// Field-level configuration
// ============================================================================

/// One configured form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Rendered as an asterisk; not enforced on submit
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldConfig {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Label as displayed next to the control ("Name*:")
    pub fn display_label(&self) -> String {
        format!("{}{}:", self.label, if self.required { "*" } else { "" })
    }
}

/// One column of the list table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnConfig {
    pub title: &'static str,
    pub field: &'static str,
    pub sortable: bool,
}

impl ColumnConfig {
    pub const fn new(title: &'static str, field: &'static str) -> Self {
        Self {
            title,
            field,
            sortable: true,
        }
    }
}

/// Secondary collection whose rows map foreign ids to labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupSpec {
    /// Table column rendered through this lookup
    pub column: &'static str,
    /// Collection path of the referenced entity
    pub source_path: &'static str,
    /// Human name of the referenced collection, used in warnings
    pub source_label: &'static str,
    pub key_field: &'static str,
    pub label_field: &'static str,
}
