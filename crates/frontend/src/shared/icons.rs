use leptos::prelude::*;

/// Path data of a 24×24 stroke icon
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "products" => &[
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12l8.73-5.04",
            "M12 22V12",
        ],
        "inventory" => &[
            "M4 3h5a1 1 0 0 1 1 1v5a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
            "M15 3h5a1 1 0 0 1 1 1v5a1 1 0 0 1-1 1h-5a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1z",
            "M15 14h5a1 1 0 0 1 1 1v5a1 1 0 0 1-1 1h-5a1 1 0 0 1-1-1v-5a1 1 0 0 1 1-1z",
            "M4 14h5a1 1 0 0 1 1 1v5a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1v-5a1 1 0 0 1 1-1z",
        ],
        "suppliers" => &["M3 22h18", "M6 22V8l6-5 6 5v14", "M9 22v-9h6v9"],
        "orders" => &[
            "M21 15V5a2 2 0 0 0-2-2H7l-4 4v8a2 2 0 0 0 2 2h6",
            "M3 7h4V3",
            "M16 19l2 2 4-4",
        ],
        "folder-closed" => &[
            "M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z",
        ],
        "plus" => &["M12 5v14", "M5 12h14"],
        "refresh" => &[
            "M21 12a9 9 0 0 1-15.5 6.2L3 16",
            "M3 12a9 9 0 0 1 15.5-6.2L21 8",
            "M21 3v5h-5",
            "M3 21v-5h5",
        ],
        "edit" => &["M12 20h9", "M16.5 3.5a2.1 2.1 0 0 1 3 3L7 19l-4 1 1-4z"],
        "eye" => &[
            "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z",
            "M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
        ],
        "delete" => &[
            "M3 6h18",
            "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6",
            "M10 11v6",
            "M14 11v6",
            "M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2",
        ],
        "save" => &[
            "M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z",
            "M17 21v-8H7v8",
            "M7 3v5h8",
        ],
        "x" | "cancel" => &["M18 6 6 18", "M6 6l12 12"],
        "arrow-left" => &["M19 12H5", "M12 19l-7-7 7-7"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "chevrons-left" => &["M11 17l-5-5 5-5", "M18 17l-5-5 5-5"],
        "chevrons-right" => &["M13 17l5-5-5-5", "M6 17l5-5-5-5"],
        _ => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z", "M12 8v4l3 3"],
    }
}

/// Navigation icons are drawn larger than inline button icons
fn icon_size(name: &str) -> u8 {
    match name {
        "products" | "inventory" | "suppliers" | "orders" => 20,
        _ => 16,
    }
}

pub fn icon(name: &str) -> AnyView {
    let size = icon_size(name);
    let paths = icon_paths(name)
        .iter()
        .map(|d| view! { <path d=*d/> })
        .collect_view();
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths}
        </svg>
    }
    .into_any()
}
