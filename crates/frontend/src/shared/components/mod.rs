pub mod pagination_controls;
pub mod toast;

pub use pagination_controls::PaginationControls;
pub use toast::{Toaster, ToastService};
