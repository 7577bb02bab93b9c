//! News Card Components
//!
//! Cards for flagged and verified items. Each card owns its own
//! expanded / collapsed state.

use leptos::*;

use crisistruth::feed::{
    evidence_preview, impact_background, impact_color, score_percent, ScoreBand, SeverityTone,
};
use crisistruth::text::{capitalize, truncate_text};
use crisistruth::{FakeNewsItem, RealNewsItem};

const DESCRIPTION_CHARS: usize = 220;

/// Flagged (debunked) item with verdict meter and contradicting evidence
#[component]
pub fn FakeNewsCard(item: FakeNewsItem) -> impl IntoView {
    let expanded = create_rw_signal(false);
    let severity = SeverityTone::from_severity(&item.severity);
    let band = ScoreBand::from_score(item.verdict_score);
    let evidence = item.real_evidence.clone();

    view! {
        <article
            class="bg-white rounded-2xl border border-slate-200 p-6 shadow-sm"
            style=format!("border-left: 5px solid {}", severity.color())
        >
            <div class="flex flex-wrap items-center gap-2 mb-3 text-xs font-bold">
                <span class="px-2 py-1 rounded-full text-white" style=format!("background: {}", severity.color())>
                    {if item.severity.is_empty() { "UNRATED".to_string() } else { item.severity.to_uppercase() }}
                </span>
                <span class="px-2 py-1 rounded-full bg-slate-100 text-slate-600">{item.category.clone()}</span>
                {(!item.platform.is_empty()).then(|| view! {
                    <span class="px-2 py-1 rounded-full bg-slate-100 text-slate-600">{item.platform.clone()}</span>
                })}
                {(!item.label.is_empty()).then(|| view! {
                    <span class="px-2 py-1 rounded-full bg-red-50 text-red-600">{item.label.clone()}</span>
                })}
                <span class="ml-auto text-slate-400 font-medium">{item.time_detected.clone()}</span>
            </div>

            <h3 class="text-lg font-bold text-slate-900 mb-2">{item.title.clone()}</h3>
            <p class="text-sm text-slate-600 mb-4">{truncate_text(&item.description, DESCRIPTION_CHARS)}</p>

            // Verdict meter
            <div class="mb-4">
                <div class="flex justify-between text-xs font-bold mb-1">
                    <span class="text-slate-500">"Verdict score"</span>
                    <span style=format!("color: {}", band.color())>
                        {format!("{:.0}%", score_percent(item.verdict_score))}
                    </span>
                </div>
                <div class="h-2 bg-slate-100 rounded-full overflow-hidden">
                    <div
                        class="h-full rounded-full"
                        style=format!("width: {:.0}%; background: {}", score_percent(item.verdict_score), band.color())
                    />
                </div>
            </div>

            // Contradicting evidence
            {(!evidence.is_empty()).then(|| {
                let evidence = evidence.clone();
                let has_toggle = evidence_preview(&evidence, false).has_toggle;
                let text = {
                    let evidence = evidence.clone();
                    move || evidence_preview(&evidence, expanded.get()).text
                };
                view! {
                    <div class="bg-green-50 border border-green-200 rounded-xl p-4 text-sm">
                        <p class="font-bold text-green-700 mb-1">"✅ Real evidence"</p>
                        <p class="text-slate-700">{text}</p>
                        {has_toggle.then(|| view! {
                            <button
                                class="mt-2 text-blue-600 font-semibold hover:underline"
                                on:click=move |_| expanded.update(|open| *open = !*open)
                            >
                                {move || if expanded.get() { "Show Less" } else { "Read More" }}
                            </button>
                        })}
                    </div>
                }
            })}

            {(!item.source_url.is_empty()).then(|| view! {
                <a
                    href=item.source_url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-block mt-4 text-sm font-bold text-blue-600 hover:underline"
                >
                    "Analyze Source →"
                </a>
            })}
        </article>
    }
}

/// Verified item with impact tone, methods and corroborating sources
#[component]
pub fn RealNewsCard(item: RealNewsItem) -> impl IntoView {
    let expanded = create_rw_signal(false);
    let color = impact_color(&item.impact_level);
    let background = impact_background(&item.impact_level);
    let description = item.description.clone();
    let long_description = description.chars().count() > DESCRIPTION_CHARS;

    view! {
        <article
            class="bg-white rounded-2xl border border-slate-200 p-6 shadow-sm"
            style=format!("border-top: 4px solid {}", color)
        >
            <div class="flex flex-wrap items-center gap-2 mb-3 text-xs font-bold">
                <span class="px-2 py-1 rounded-full" style=format!("background: {}; color: {}", background, color)>
                    {format!("{} Impact", capitalize(&item.impact_level))}
                </span>
                <span class="px-2 py-1 rounded-full bg-slate-100 text-slate-600">{item.category.clone()}</span>
                {(!item.region.is_empty()).then(|| view! {
                    <span class="px-2 py-1 rounded-full bg-slate-100 text-slate-600">{format!("📍 {}", item.region)}</span>
                })}
                <span class="ml-auto text-green-600">
                    {format!("✔ {:.0}% verified", score_percent(item.verification_score))}
                </span>
            </div>

            <h3 class="text-lg font-bold text-slate-900 mb-2">{item.title.clone()}</h3>
            <p class="text-sm text-slate-600">
                {move || if expanded.get() || !long_description {
                    description.clone()
                } else {
                    truncate_text(&description, DESCRIPTION_CHARS)
                }}
            </p>
            {long_description.then(|| view! {
                <button
                    class="mt-1 text-sm text-blue-600 font-semibold hover:underline"
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    {move || if expanded.get() { "Show Less" } else { "Read More" }}
                </button>
            })}

            {(!item.verification_methods.is_empty()).then(|| view! {
                <div class="flex flex-wrap gap-2 mt-4">
                    {item.verification_methods.iter().map(|method| view! {
                        <span class="px-2 py-1 rounded-lg bg-blue-50 text-blue-700 text-xs font-semibold">
                            {method.clone()}
                        </span>
                    }).collect_view()}
                </div>
            })}

            <div class="flex flex-wrap items-center justify-between gap-2 mt-4 text-sm">
                <span class="text-slate-500">
                    {format!("{} · {}", item.source_name, item.published_time)}
                    {(!item.additional_sources.is_empty()).then(|| {
                        format!(" · also reported by {}", item.additional_sources.join(", "))
                    })}
                </span>
                {(!item.source_url.is_empty()).then(|| view! {
                    <a
                        href=item.source_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="font-bold text-blue-600 hover:underline"
                    >
                        "View Report →"
                    </a>
                })}
            </div>
        </article>
    }
}
