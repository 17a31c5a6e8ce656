//! PageFrame: root wrapper of every entity screen.
//!
//! Sets `id = "{entity}--{category}"` and `data-page-category` on the root
//! element so screens can be found in the DOM and styled per category.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    List,
    /// Create and edit forms
    Detail,
    View,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Detail => "detail",
            Self::View => "view",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Self::List => "page",
            Self::Detail => "page page--detail",
            Self::View => "page page--view",
        }
    }
}

/// `"vendors--list"` for the `/vendors` table
pub fn page_id(route_base: &str, category: PageCategory) -> String {
    format!("{}--{}", route_base.trim_start_matches('/'), category.as_str())
}

#[component]
pub fn PageFrame(
    #[prop(into)] page_id: String,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=category.class() data-page-category=category.as_str()>
            {children()}
        </div>
    }
}
