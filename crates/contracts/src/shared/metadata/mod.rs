//! Field configuration tables for entity screens
//!
//! Every entity declares a static [`EntitySchema`]: which collection it lives
//! in, which field is its identity, how its form is split into sections and
//! which columns the list table shows. Screens are rendered from these tables
//! instead of per-entity markup.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a002_vendor::schema::VENDOR;
//!
//! for field in VENDOR.fields() {
//!     println!("{}: {}", field.key, field.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use types::{ColumnConfig, EntitySchema, FieldConfig, FieldSection, LookupSpec};
pub use validation::native_validity;
