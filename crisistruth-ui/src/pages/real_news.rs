//! Real News Page
//!
//! Feed of verified items with category and impact filters.

use leptos::*;

use crisistruth::feed::{category_histogram, distinct_sources, CategoryFilter, FeedFilter, ImpactFilter};
use crisistruth::RealNewsItem;

use crate::api;
use crate::components::{BarChart, CategoryBar, ImpactBar, ListSkeleton, RealNewsCard, RefreshButton, SearchBox};
use crate::pages::fake_news::SEARCH_DEBOUNCE_MS;
use crate::state::{use_debounce, use_snapshot};

#[component]
pub fn RealNews() -> impl IntoView {
    let (snapshot, refresh) = use_snapshot(api::fetch_real_news, None);

    let category = create_rw_signal(CategoryFilter::All);
    let impact = create_rw_signal(ImpactFilter::All);
    let query = create_rw_signal(String::new());
    let settled_query = use_debounce(query.into(), SEARCH_DEBOUNCE_MS);

    let filter = create_memo(move |_| {
        let mut filter = FeedFilter::default();
        filter.select_category(category.get());
        filter.select_impact(impact.get());
        filter.set_query(settled_query.get());
        filter
    });

    let visible = create_memo(move |_| {
        snapshot.with(|s| {
            s.payload()
                .map(|items| filter.with(|f| f.apply(items).into_iter().cloned().collect::<Vec<RealNewsItem>>()))
                .unwrap_or_default()
        })
    });
    let histogram = Signal::derive(move || {
        snapshot.with(|s| s.payload().map(|items| category_histogram(items)).unwrap_or_default())
    });
    let summary = move || {
        snapshot.with(|s| {
            let items = s.payload().map(Vec::as_slice).unwrap_or(&[]);
            format!(
                "{} of {} verified reports from {} sources",
                visible.with(Vec::len),
                items.len(),
                distinct_sources(items)
            )
        })
    };
    let loading = Signal::derive(move || snapshot.with(|s| s.is_loading()));

    view! {
        <div class="space-y-8">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-extrabold text-slate-900">"🛡️ Verified News"</h1>
                    <p class="text-slate-500 mt-1">{summary}</p>
                </div>
                <RefreshButton on_refresh=refresh loading=loading />
            </div>

            <div class="space-y-4">
                <SearchBox query=query placeholder="Search verified reports..." />
                <CategoryBar selected=category />
                <ImpactBar selected=impact />
            </div>

            {move || {
                if snapshot.with(|s| s.shows_placeholder()) {
                    view! { <ListSkeleton count=3 /> }.into_view()
                } else if visible.with(Vec::is_empty) {
                    view! {
                        <p class="text-center text-slate-500 py-12">"No verified news matches the current filters."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 gap-6">
                            <For
                                each=move || visible.get()
                                key=|item| item.id
                                children=|item| view! { <RealNewsCard item=item /> }
                            />
                        </div>
                    }.into_view()
                }
            }}

            <BarChart data=histogram title="Verified by Category" />
        </div>
    }
}
