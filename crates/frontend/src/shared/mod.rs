pub mod api_utils;
pub mod components;
pub mod form;
pub mod icons;
pub mod list_utils;
pub mod odata;
pub mod page_frame;
pub mod refresh_guard;
pub mod services;
