//! Fetch State
//!
//! The envelope a view renders while a GET is in flight, plus the guard
//! that keeps late responses from landing after they stopped mattering.
//!
//! Every request takes a [`RequestToken`] from the view's
//! [`RequestTracker`] before it goes out and checks
//! [`RequestToken::is_current`] before writing any state. Starting a newer
//! request, or tearing the view down ([`RequestTracker::invalidate`]),
//! makes all earlier tokens stale.

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::FETCH_FAILED;

/// Phase of a single-URL fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    /// Settle a finished request.
    ///
    /// Errors keep their own text; a blank message is replaced so a failure
    /// never renders empty.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchState::Loaded(data),
            Err(e) => {
                let message = e.to_string();
                if message.trim().is_empty() {
                    FetchState::Failed(FETCH_FAILED.to_string())
                } else {
                    FetchState::Failed(message)
                }
            }
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Generation counter shared by one view's requests
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    generation: Arc<AtomicU64>,
}

/// Captured at request time; says whether the response may still be applied
#[derive(Debug, Clone)]
pub struct RequestToken {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier one
    pub fn begin(&self) -> RequestToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestToken {
            generation,
            current: Arc::clone(&self.generation),
        }
    }

    /// Owner is going away; nothing in flight may write anymore
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl RequestToken {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

/// Last good payload of a list or dashboard view.
///
/// Unlike [`FetchState`], a failed refresh has no visible effect: it is
/// logged and the previous payload stays on screen. Without any successful
/// fetch the view keeps showing its loading placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    payload: Option<T>,
    loading: bool,
    revision: u64,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Snapshot<T> {
    /// Views fetch on mount, so a fresh snapshot starts out loading
    pub fn new() -> Self {
        Self {
            payload: None,
            loading: true,
            revision: 0,
        }
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Apply a finished fetch. Returns `true` if the payload was replaced.
    pub fn settle<E: Display>(&mut self, result: Result<T, E>) -> bool {
        self.loading = false;
        match result {
            Ok(payload) => {
                self.payload = Some(payload);
                self.revision += 1;
                true
            }
            Err(e) => {
                tracing::warn!(
                    "Refresh failed, keeping {} data: {}",
                    if self.payload.is_some() { "previous" } else { "no" },
                    e
                );
                false
            }
        }
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of successful settles so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Nothing has loaded yet, show the placeholder
    pub fn shows_placeholder(&self) -> bool {
        self.payload.is_none()
    }
}

#[cfg(feature = "native")]
pub use driver::UrlFetcher;

#[cfg(feature = "native")]
mod driver {
    use super::{FetchState, RequestToken, RequestTracker};
    use crate::client::ApiClient;
    use crate::error::ApiError;
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use tokio::sync::watch;

    /// Fetches one URL at a time and publishes its [`FetchState`].
    ///
    /// Changing the URL starts a new request; whatever the previous request
    /// returns afterwards is dropped. Dropping the fetcher does the same for
    /// the request in flight.
    pub struct UrlFetcher<T> {
        client: ApiClient,
        url: Option<String>,
        tracker: RequestTracker,
        state: Arc<watch::Sender<FetchState<T>>>,
    }

    impl<T> UrlFetcher<T>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        pub fn new(client: ApiClient) -> Self {
            let (state, _) = watch::channel(FetchState::Loading);
            Self {
                client,
                url: None,
                tracker: RequestTracker::new(),
                state: Arc::new(state),
            }
        }

        pub fn url(&self) -> Option<&str> {
            self.url.as_deref()
        }

        /// Point the fetcher at `url`. Same URL as before is a no-op.
        pub fn set_url(&mut self, url: impl Into<String>) {
            let url = url.into();
            if self.url.as_deref() == Some(url.as_str()) {
                return;
            }
            self.url = Some(url);
            self.start();
        }

        pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
            self.state.subscribe()
        }

        fn start(&self) {
            let Some(url) = self.url.clone() else {
                return;
            };

            // the new generation and its Loading are published under one lock
            let mut token = None;
            self.state.send_modify(|state| {
                token = Some(self.tracker.begin());
                *state = FetchState::Loading;
            });
            let Some(token) = token else {
                return;
            };

            let client = self.client.clone();
            let state = Arc::clone(&self.state);
            tokio::spawn(async move {
                let result = client.get_json::<T>(&url).await;
                if !publish(&state, &token, &url, result) {
                    tracing::debug!("Dropping superseded response from {}", url);
                }
            });
        }
    }

    /// Write `result` unless `token` has been superseded.
    ///
    /// The check runs under the channel's write lock, the same lock
    /// [`UrlFetcher::set_url`] takes to start a newer request.
    pub(super) fn publish<T>(
        state: &watch::Sender<FetchState<T>>,
        token: &RequestToken,
        url: &str,
        result: Result<T, ApiError>,
    ) -> bool {
        state.send_if_modified(|current| {
            if !token.is_current() {
                return false;
            }
            if let Err(e) = &result {
                tracing::warn!("Fetch of {} failed: {}", url, e);
            }
            *current = FetchState::from_result(result);
            true
        })
    }

    impl<T> Drop for UrlFetcher<T> {
        fn drop(&mut self) {
            self.tracker.invalidate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_envelope_phases() {
        let loading: FetchState<u32> = FetchState::default();
        assert!(loading.is_loading());
        assert!(loading.data().is_none() && loading.error().is_none());

        let loaded = FetchState::<u32>::from_result::<ApiError>(Ok(5));
        assert_eq!(loaded.data(), Some(&5));
        assert!(loaded.error().is_none());
        assert!(!loaded.is_loading());

        let failed = FetchState::<u32>::from_result(Err(ApiError::Status { status: 404 }));
        assert_eq!(failed.error(), Some("Failed to fetch data"));
        assert!(failed.data().is_none());
    }

    #[test]
    fn test_blank_error_gets_generic_message() {
        let failed = FetchState::<u32>::from_result(Err(""));
        assert_eq!(failed.error(), Some(FETCH_FAILED));
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        assert!(first.is_current());

        let second = tracker.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_invalidate_on_teardown() {
        let tracker = RequestTracker::new();
        let token = tracker.begin();

        tracker.invalidate();
        assert!(!token.is_current());
    }

    #[test]
    fn test_snapshot_keeps_stale_data_on_failure() {
        let mut snapshot: Snapshot<Vec<u32>> = Snapshot::new();
        assert!(snapshot.is_loading());
        assert!(snapshot.shows_placeholder());

        assert!(snapshot.settle::<ApiError>(Ok(vec![1, 2, 3])));
        assert_eq!(snapshot.payload(), Some(&vec![1, 2, 3]));

        snapshot.begin_refresh();
        assert!(snapshot.is_loading());
        assert!(!snapshot.settle::<ApiError>(Err(ApiError::Timeout)));
        assert!(!snapshot.is_loading());
        assert_eq!(snapshot.payload(), Some(&vec![1, 2, 3]));
        assert_eq!(snapshot.revision(), 1);
    }

    #[test]
    fn test_snapshot_failure_without_data_keeps_placeholder() {
        let mut snapshot: Snapshot<Vec<u32>> = Snapshot::new();
        snapshot.settle(Err(ApiError::Network("refused".into())));

        assert!(snapshot.shows_placeholder());
        assert!(!snapshot.is_loading());
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_publish_skips_superseded_token() {
        let (state, rx) = tokio::sync::watch::channel(FetchState::<u32>::Loading);
        let tracker = RequestTracker::new();
        let stale = tracker.begin();

        // a newer request starts while the stale one is still in flight
        let mut fresh = None;
        state.send_modify(|s| {
            fresh = Some(tracker.begin());
            *s = FetchState::Loading;
        });

        assert!(!driver::publish(&state, &stale, "/slow", Ok(1)));
        assert!(rx.borrow().is_loading());

        let fresh = fresh.unwrap();
        assert!(driver::publish(&state, &fresh, "/fast", Ok(2)));
        assert_eq!(*rx.borrow(), FetchState::Loaded(2));

        tracker.invalidate();
        assert!(!driver::publish(&state, &fresh, "/fast", Ok(3)));
        assert_eq!(*rx.borrow(), FetchState::Loaded(2));
    }

    #[test]
    fn test_refresh_replaces_wholesale() {
        let mut snapshot: Snapshot<Vec<u32>> = Snapshot::new();
        snapshot.settle::<ApiError>(Ok(vec![1, 2, 3]));
        snapshot.settle::<ApiError>(Ok(vec![9]));

        assert_eq!(snapshot.payload(), Some(&vec![9]));
    }
}
