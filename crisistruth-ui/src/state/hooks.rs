//! Reactive Hooks
//!
//! Every timer and in-flight request started here belongs to the calling
//! component and is cancelled or invalidated in its `on_cleanup`.

use gloo_timers::callback::{Interval, Timeout};
use leptos::*;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crisistruth::{ApiError, Debounce, FetchState, RequestTracker, Snapshot};

use crate::api;

/// Follow `value`, settling only after it has been unchanged for `delay_ms`
pub fn use_debounce<T: Clone + 'static>(value: Signal<T>, delay_ms: u32) -> ReadSignal<T> {
    let (debounced, set_debounced) = create_signal(value.get_untracked());
    let debounce = store_value(Debounce::new(Duration::from_millis(delay_ms as u64)));
    let timer = store_value(None::<Timeout>);

    create_effect(move |first_run: Option<()>| {
        let next = value.get();
        if first_run.is_none() {
            return;
        }

        let mut ticket = None;
        debounce.update_value(|d| ticket = Some(d.schedule(next)));
        let Some(ticket) = ticket else {
            return;
        };

        // replacing the handle drops, and so cancels, the previous timeout
        timer.set_value(Some(Timeout::new(delay_ms, move || {
            let mut fired = None;
            debounce.update_value(|d| fired = d.fire(ticket));
            if let Some(value) = fired {
                set_debounced.set(value);
            }
        })));
    });

    on_cleanup(move || {
        timer.try_update_value(|t| *t = None);
        debounce.try_update_value(|d| d.cancel());
    });

    debounced
}

/// GET the current `url` and expose its [`FetchState`].
///
/// A new URL supersedes the request in flight; its response is dropped.
/// URLs compare by value: re-setting the same string does not re-fetch.
pub fn use_fetch<T>(url: Signal<Option<String>>) -> ReadSignal<FetchState<T>>
where
    T: DeserializeOwned + Clone + 'static,
{
    let (state, set_state) = create_signal(FetchState::Loading);
    let tracker = RequestTracker::new();
    let url = create_memo(move |_| url.get());

    let tracker_for_effect = tracker.clone();
    create_effect(move |_| {
        let Some(url) = url.get() else {
            return;
        };

        let token = tracker_for_effect.begin();
        set_state.set(FetchState::Loading);

        spawn_local(async move {
            let result = api::fetch_json::<T>(&url).await;
            if !token.is_current() {
                return;
            }
            if let Err(e) = &result {
                web_sys::console::warn_1(&format!("Fetch of {} failed: {}", url, e).into());
            }
            set_state.set(FetchState::from_result(result));
        });
    });

    on_cleanup(move || tracker.invalidate());

    state
}

/// Load a list or dashboard payload on mount, and again on every
/// `refresh` call or `poll_ms` tick.
///
/// Failures are logged to the console and leave the last payload in place.
pub fn use_snapshot<T, F, Fut>(
    load: F,
    poll_ms: Option<u32>,
) -> (RwSignal<Snapshot<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let snapshot = create_rw_signal(Snapshot::new());
    let tracker = RequestTracker::new();

    let refresh: Rc<dyn Fn()> = {
        let tracker = tracker.clone();
        Rc::new(move || {
            let token = tracker.begin();
            snapshot.update(|s| s.begin_refresh());

            let pending = load();
            spawn_local(async move {
                let result = pending.await;
                if !token.is_current() {
                    return;
                }
                if let Err(e) = &result {
                    web_sys::console::warn_1(&format!("Refresh failed: {}", e).into());
                }
                snapshot.update(|s| {
                    s.settle(result);
                });
            });
        })
    };

    refresh();

    let poller = poll_ms.map(|ms| {
        let refresh = Rc::clone(&refresh);
        Interval::new(ms, move || refresh())
    });

    on_cleanup(move || {
        tracker.invalidate();
        drop(poller);
    });

    let on_refresh = Callback::new(move |_| refresh());
    (snapshot, on_refresh)
}

/// Window scroll offset, updated on every scroll event
pub fn use_scroll_offset() -> ReadSignal<f64> {
    let (offset, set_offset) = create_signal(window().scroll_y().unwrap_or(0.0));

    let handle = window_event_listener(ev::scroll, move |_| {
        set_offset.set(window().scroll_y().unwrap_or(0.0));
    });
    on_cleanup(move || handle.remove());

    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn debounce_settles_on_last_value() {
        let runtime = create_runtime();
        let query = create_rw_signal(String::new());
        let settled = use_debounce(query.into(), 200);
        TimeoutFuture::new(0).await;

        query.set("fl".to_string());
        TimeoutFuture::new(120).await;
        query.set("flood".to_string());
        TimeoutFuture::new(120).await;
        // 240ms after the first value, but the second restarted the wait
        assert_eq!(settled.get_untracked(), "");

        TimeoutFuture::new(200).await;
        assert_eq!(settled.get_untracked(), "flood");

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn fetch_ignores_unchanged_url() {
        let runtime = create_runtime();
        let url = create_rw_signal(Some("data:application/json,%5B1%2C2%5D".to_string()));
        let state = use_fetch::<Vec<u32>>(url.into());
        TimeoutFuture::new(200).await;
        assert_eq!(state.get_untracked(), FetchState::Loaded(vec![1, 2]));

        // same string again: no new request, so no return to Loading
        url.set(Some("data:application/json,%5B1%2C2%5D".to_string()));
        assert_eq!(state.get_untracked(), FetchState::Loaded(vec![1, 2]));

        url.set(Some("data:application/json,%5B3%5D".to_string()));
        assert!(state.get_untracked().is_loading());
        TimeoutFuture::new(200).await;
        assert_eq!(state.get_untracked(), FetchState::Loaded(vec![3]));

        runtime.dispose();
    }
}
