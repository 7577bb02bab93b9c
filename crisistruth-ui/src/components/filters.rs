//! Feed Filter Components
//!
//! Category and impact button rows, the search box and the refresh button.

use leptos::*;

use crisistruth::feed::{CategoryFilter, ImpactFilter, ImpactLevel, CATEGORIES, NEUTRAL_COLOR};
use crisistruth::text::capitalize;

const ACTIVE_BUTTON: &str = "px-4 py-2 rounded-full text-sm font-semibold bg-slate-900 text-white";
const IDLE_BUTTON: &str =
    "px-4 py-2 rounded-full text-sm font-semibold bg-white text-slate-600 border border-slate-200 hover:bg-slate-100";

/// One button per category, `all` first
#[component]
pub fn CategoryBar(selected: RwSignal<CategoryFilter>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {CATEGORIES.iter().map(|name| {
                let filter = CategoryFilter::parse(name);
                let label = if *name == "all" { "All".to_string() } else { name.to_string() };
                let is_active = {
                    let filter = filter.clone();
                    move || selected.with(|current| *current == filter)
                };
                view! {
                    <button
                        class=move || if is_active() { ACTIVE_BUTTON } else { IDLE_BUTTON }
                        on:click=move |_| selected.set(filter.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Impact level buttons, tinted with each level's color
#[component]
pub fn ImpactBar(selected: RwSignal<ImpactFilter>) -> impl IntoView {
    let options = std::iter::once(ImpactFilter::All).chain(ImpactLevel::ALL.map(ImpactFilter::Only));

    view! {
        <div class="flex flex-wrap gap-2">
            {options.map(|filter| {
                let (label, color) = match filter {
                    ImpactFilter::All => ("All Impact".to_string(), NEUTRAL_COLOR),
                    ImpactFilter::Only(level) => (capitalize(level.as_str()), level.color()),
                };
                let style = move || {
                    if selected.get() == filter {
                        format!("background: {}; color: white; border-color: {}", color, color)
                    } else {
                        format!("color: {}; border-color: {}", color, color)
                    }
                };
                view! {
                    <button
                        class="px-4 py-2 rounded-full text-sm font-semibold border-2 bg-white"
                        style=style
                        on:click=move |_| selected.set(filter)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Search input; the raw text updates on every keystroke
#[component]
pub fn SearchBox(
    query: RwSignal<String>,
    #[prop(into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <div class="relative flex-1 min-w-[240px]">
            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400">"🔎"</span>
            <input
                type="text"
                class="w-full pl-10 pr-4 py-2 rounded-xl border border-slate-200 focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn RefreshButton(
    on_refresh: Callback<()>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class="px-4 py-2 rounded-xl text-sm font-semibold bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
            disabled=move || loading.get()
            on:click=move |_| on_refresh.call(())
        >
            {move || if loading.get() { "Refreshing..." } else { "↻ Refresh" }}
        </button>
    }
}
