//! Field kind enumeration for form rendering

use serde::{Deserialize, Serialize};

/// Closed set of value kinds a configured field can hold.
///
/// The form renderer dispatches on this with an exhaustive `match`,
/// so adding a kind forces every renderer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Email,
    Date,
    Boolean,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Date => "date",
            Self::Boolean => "boolean",
        }
    }

    /// HTML `type` attribute of the native control used for this kind
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Date => "datetime-local",
            Self::Boolean => "checkbox",
        }
    }
}
