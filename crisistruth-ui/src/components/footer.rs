//! Footer Component
//!
//! Bottom bar with the backend status.

use leptos::*;

use crisistruth::endpoints::DASHBOARD_STATS;
use crisistruth::{DashboardSnapshot, FetchState};

use crate::api;
use crate::state::use_fetch;

#[component]
pub fn Footer() -> impl IntoView {
    let url = Signal::derive(|| Some(api::api_url(DASHBOARD_STATS)));
    let status = use_fetch::<DashboardSnapshot>(url);

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white border-t border-slate-200 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <span class="text-slate-500">"© CrisisTruth AI · Verify before you share"</span>

                {move || match status.get() {
                    FetchState::Loading => view! {
                        <span class="flex items-center space-x-2 text-slate-400">
                            <span class="loading-spinner w-4 h-4" />
                            <span>"Connecting..."</span>
                        </span>
                    }.into_view(),
                    FetchState::Loaded(snapshot) => view! {
                        <span class="flex items-center space-x-1 text-green-600">
                            <span class="w-2 h-2 bg-green-500 rounded-full pulse" />
                            <span>{format!("Engine online · threat level {}", snapshot.stats.threat_level)}</span>
                        </span>
                    }.into_view(),
                    FetchState::Failed(message) => view! {
                        <span class="flex items-center space-x-1 text-red-500">
                            <span class="w-2 h-2 bg-red-500 rounded-full" />
                            <span>{format!("Engine offline: {}", message)}</span>
                        </span>
                    }.into_view(),
                }}
            </div>
        </footer>
    }
}
