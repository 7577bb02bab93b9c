//! Fake News Page
//!
//! Feed of flagged items with category filter, debounced search and a
//! per-category breakdown.

use leptos::*;

use crisistruth::feed::{category_histogram, CategoryFilter, FeedFilter};
use crisistruth::FakeNewsItem;

use crate::api;
use crate::components::{BarChart, CategoryBar, FakeNewsCard, ListSkeleton, RefreshButton, SearchBox};
use crate::state::{use_debounce, use_snapshot};

pub(crate) const SEARCH_DEBOUNCE_MS: u32 = 500;

#[component]
pub fn FakeNews() -> impl IntoView {
    let (snapshot, refresh) = use_snapshot(api::fetch_fake_news, None);

    let category = create_rw_signal(CategoryFilter::All);
    let query = create_rw_signal(String::new());
    let settled_query = use_debounce(query.into(), SEARCH_DEBOUNCE_MS);

    let filter = create_memo(move |_| {
        let mut filter = FeedFilter::default();
        filter.select_category(category.get());
        filter.set_query(settled_query.get());
        filter
    });

    let visible = create_memo(move |_| {
        snapshot.with(|s| {
            s.payload()
                .map(|items| filter.with(|f| f.apply(items).into_iter().cloned().collect::<Vec<FakeNewsItem>>()))
                .unwrap_or_default()
        })
    });
    let histogram = Signal::derive(move || {
        snapshot.with(|s| s.payload().map(|items| category_histogram(items)).unwrap_or_default())
    });
    let total = move || snapshot.with(|s| s.payload().map(Vec::len).unwrap_or(0));
    let loading = Signal::derive(move || snapshot.with(|s| s.is_loading()));

    view! {
        <div class="space-y-8">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-extrabold text-slate-900">"🚨 Fake News Tracker"</h1>
                    <p class="text-slate-500 mt-1">
                        {move || format!("{} of {} flagged items", visible.with(Vec::len), total())}
                    </p>
                </div>
                <RefreshButton on_refresh=refresh loading=loading />
            </div>

            <div class="flex flex-wrap items-center gap-4">
                <SearchBox query=query placeholder="Search flagged claims..." />
                <CategoryBar selected=category />
            </div>

            {move || {
                if snapshot.with(|s| s.shows_placeholder()) {
                    view! { <ListSkeleton count=3 /> }.into_view()
                } else if visible.with(Vec::is_empty) {
                    view! {
                        <p class="text-center text-slate-500 py-12">"No flagged news matches the current filters."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid gap-6">
                            <For
                                each=move || visible.get()
                                key=|item| item.id
                                children=|item| view! { <FakeNewsCard item=item /> }
                            />
                        </div>
                    }.into_view()
                }
            }}

            <BarChart data=histogram title="Flagged by Category" />
        </div>
    }
}
