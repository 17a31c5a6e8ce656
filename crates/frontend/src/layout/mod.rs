pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

use crate::shared::components::{ToastService, Toaster};

/// Application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// +-----------+------------------------------+
/// ```
/// Toasts float above the content.
#[component]
pub fn Shell(toasts: ToastService, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <aside class="app-sidebar">
                <Sidebar />
            </aside>
            <main class="app-main">
                {children()}
            </main>
            <Toaster service=toasts />
        </div>
    }
}
