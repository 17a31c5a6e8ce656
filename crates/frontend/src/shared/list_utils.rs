//! Table helpers: sort indicators and the debounced search box

use contracts::shared::query::SortDirection;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay between the last keystroke and the search callback
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Header suffix for a sortable column
pub fn sort_indicator(sorted: Option<(&str, SortDirection)>, field: &str) -> &'static str {
    match sorted {
        Some((current, SortDirection::Asc)) if current == field => " ▲",
        Some((current, SortDirection::Desc)) if current == field => " ▼",
        _ => " ⇅",
    }
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Applied search term
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Dropping a pending timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || if is_active() { "search-input__field active" } else { "search-input__field" }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
