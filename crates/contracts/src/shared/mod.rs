pub mod datetime;
pub mod form;
pub mod lookup;
pub mod metadata;
pub mod odata;
pub mod query;
pub mod record;
