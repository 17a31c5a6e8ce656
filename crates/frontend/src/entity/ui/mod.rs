pub mod details;
pub mod list;
pub mod view;
