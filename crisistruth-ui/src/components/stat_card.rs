//! Stat Card Component

use leptos::*;

use crisistruth::dashboard::StatCard;

#[component]
pub fn StatCardView(card: StatCard) -> impl IntoView {
    view! {
        <div
            class="bg-white p-6 rounded-2xl border border-slate-200 shadow-sm"
            style=format!("border-bottom: 4px solid {}", card.color)
        >
            <div class="text-2xl mb-3">{card.icon}</div>
            <p class="text-xs font-bold text-slate-500">{card.label}</p>
            <p class="text-3xl font-extrabold mt-1">{card.display_value()}</p>
        </div>
    }
}
