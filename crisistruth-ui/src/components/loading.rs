//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-width loading spinner with an optional caption
#[component]
pub fn Loading(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-slate-500">
            <div class="loading-spinner w-8 h-8" />
            {message.map(|text| view! { <p class="mt-3 text-sm font-semibold">{text}</p> })}
        </div>
    }
}

/// Skeleton loader for feed cards
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-white border border-slate-200 rounded-2xl p-6">
                    <div class="h-4 bg-slate-200 rounded w-1/4 mb-4" />
                    <div class="h-6 bg-slate-200 rounded w-3/4 mb-2" />
                    <div class="h-4 bg-slate-200 rounded w-2/3" />
                </div>
            }).collect_view()}
        </div>
    }
}
