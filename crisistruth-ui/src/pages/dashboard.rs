//! Dashboard Page
//!
//! Live overview: headline counters, threat level, topic analysis, a trend
//! of polled counters and the most recent flagged / verified items.

use leptos::*;

use crisistruth::charts::LinePoint;
use crisistruth::dashboard::{push_trend, stat_cards, threat_badge, topic_bars, ThreatTone};
use crisistruth::text::truncate_text;
use crisistruth::DashboardSnapshot;

use crate::api;
use crate::components::{LineChart, Loading, RefreshButton, StatCardView};
use crate::state::use_snapshot;

/// Dashboard re-fetch interval
const POLL_MS: u32 = 30_000;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (snapshot, refresh) = use_snapshot(api::fetch_dashboard, Some(POLL_MS));
    let trend = create_rw_signal(Vec::<LinePoint>::new());

    // One trend point per successful fetch
    create_effect(move |seen: Option<u64>| {
        let (revision, stats) =
            snapshot.with(|s| (s.revision(), s.payload().map(|data| data.stats.clone())));
        if seen != Some(revision) {
            if let Some(stats) = stats {
                let label = chrono::Local::now().format("%H:%M:%S").to_string();
                trend.update(|points| push_trend(points, label, &stats));
            }
        }
        revision
    });

    let loading = Signal::derive(move || snapshot.with(|s| s.is_loading()));

    view! {
        {move || match snapshot.with(|s| s.payload().cloned()) {
            Some(data) => view! {
                <DashboardBody data=data trend=trend refresh=refresh loading=loading />
            }.into_view(),
            None => view! { <Loading message="Loading intelligence..." /> }.into_view(),
        }}
    }
}

#[component]
fn DashboardBody(
    data: DashboardSnapshot,
    trend: RwSignal<Vec<LinePoint>>,
    refresh: Callback<()>,
    loading: Signal<bool>,
) -> impl IntoView {
    let threat = ThreatTone::from_level(&data.stats.threat_level);

    view! {
        <div class="space-y-10">
            // Header
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-extrabold text-slate-900">
                        "CrisisTruth " <span class="text-blue-500">"AI"</span>
                    </h1>
                    <p class="text-[11px] font-semibold tracking-widest text-slate-400 mt-1">
                        "INTELLIGENCE DASHBOARD"
                    </p>
                </div>
                <div class="flex items-center gap-4">
                    <div class="bg-white px-5 py-3 rounded-xl border border-slate-200 text-right">
                        <p class="text-[10px] font-bold text-slate-400">"THREAT LEVEL"</p>
                        <p class="text-base font-extrabold" style=format!("color: {}", threat.color())>
                            {threat_badge(&data.stats.threat_level)}
                        </p>
                    </div>
                    <RefreshButton on_refresh=refresh loading=loading />
                </div>
            </div>

            // Stat cards
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {stat_cards(&data.stats)
                    .into_iter()
                    .map(|card| view! { <StatCardView card=card /> })
                    .collect_view()}
            </div>

            // Topic analysis, bar heights in px
            <section class="bg-white p-8 rounded-3xl border border-slate-200">
                <h3 class="text-base font-bold mb-6">"📊 Topic Analysis"</h3>
                <div class="flex items-end gap-5 h-[220px] pb-5">
                    {topic_bars(&data.category_distribution)
                        .into_iter()
                        .map(|bar| view! {
                            <div class="flex-1 flex flex-col items-center gap-2">
                                <div
                                    class="w-full bg-blue-500 rounded-t opacity-80"
                                    style=format!("height: {}px", bar.height_px)
                                />
                                <span class="text-[10px] font-bold text-slate-500 text-center">{bar.name}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <LineChart points=trend title="Live Detection Trend" />

            // Trending lists
            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-white p-8 rounded-3xl border border-slate-200">
                    <h2 class="text-lg font-extrabold text-red-500 mb-5">"🔥 RECENT DECEPTIONS"</h2>
                    <div class="space-y-4">
                        {data.trending_fake.into_iter().map(|news| view! {
                            <div class="border-b border-slate-100 pb-4">
                                <span class="text-[10px] font-black text-red-500">{format!("{}% FAKE", news.fake_score)}</span>
                                <p class="font-semibold text-slate-800 my-1">{truncate_text(&news.title, 90)}</p>
                                <a href=news.url target="_blank" rel="noopener noreferrer" class="text-xs font-bold text-blue-600">
                                    "Analyze Source →"
                                </a>
                            </div>
                        }).collect_view()}
                    </div>
                </section>

                <section class="bg-white p-8 rounded-3xl border border-slate-200">
                    <h2 class="text-lg font-extrabold text-emerald-500 mb-5">"🛡️ VERIFIED INTEL"</h2>
                    <div class="space-y-4">
                        {data.trending_real.into_iter().map(|news| view! {
                            <div class="border-b border-slate-100 pb-4">
                                <span class="text-[10px] font-black text-emerald-500">"VERIFIED"</span>
                                <p class="font-semibold text-slate-800 my-1">{truncate_text(&news.title, 90)}</p>
                                <a href=news.url target="_blank" rel="noopener noreferrer" class="text-xs font-bold text-blue-600">
                                    "View Report →"
                                </a>
                            </div>
                        }).collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}
