// tests/backend_integration.rs
//
// Drives the reqwest client against a stub backend served by axum on an
// ephemeral port.
//
// Covered:
// - GET /dashboard-stats, /fake-news, /real-news decode and filtering
// - POST /verify through the chat session (success, 500, connection refused)
// - UrlFetcher success / non-2xx / URL change while a request is in flight

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::Json,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tokio::sync::watch;

use crisistruth::chat::{ChatState, CONNECTION_ERROR};
use crisistruth::config::ApiConfig;
use crisistruth::feed::{CategoryFilter, FeedFilter};
use crisistruth::{ApiClient, ChatSession, FetchState, UrlFetcher};

fn stub_router() -> Router {
    Router::new()
        .route(
            "/dashboard-stats",
            get(|| async {
                Json(json!({
                    "stats": {"totalScraped": 120, "fakeDetected": 40, "realVerified": 80, "threatLevel": "High"},
                    "categoryDistribution": [{"name": "Health", "value": 45}],
                    "trendingFake": [],
                    "trendingReal": []
                }))
            }),
        )
        .route(
            "/fake-news",
            get(|| async {
                Json(json!([
                    {"id": 1, "title": "Garlic cures flu", "category": "Health", "severity": "high", "verdictScore": 0.2},
                    {"id": 2, "title": "Banks closed for a week", "category": "Finance", "severity": "critical", "verdictScore": 0.1},
                    {"id": 3, "title": "Free money scheme", "category": "Finance", "severity": null, "verdictScore": 0.3}
                ]))
            }),
        )
        .route(
            "/real-news",
            get(|| async {
                Json(json!([
                    {"id": 7, "title": "Rate decision", "category": "Finance", "sourceName": "RBI", "impactLevel": "high"}
                ]))
            }),
        )
        .route(
            "/verify",
            post(|Json(body): Json<Value>| async move {
                let claim = body["claim"].as_str().unwrap_or_default().to_string();
                Json(json!({
                    "reasoning": format!("Checked: {}", claim),
                    "verdict": "False",
                    "scores": {"trust_score": 0.12}
                }))
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(400)).await;
                Json(json!([1]))
            }),
        )
        .route("/fast", get(|| async { Json(json!([2])) }))
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
}

async fn spawn_backend(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> ApiClient {
    let config = ApiConfig {
        base_url: format!("http://{}", addr),
        request_timeout_secs: 5,
    };
    ApiClient::new(&config).unwrap()
}

async fn settled<T: Clone>(rx: &mut watch::Receiver<FetchState<T>>) -> FetchState<T> {
    let state = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(|s| !s.is_loading()))
        .await
        .expect("fetch did not settle")
        .expect("fetcher dropped");
    state.clone()
}

#[tokio::test]
async fn dashboard_stats_decode() {
    let client = client_for(spawn_backend(stub_router()).await);

    let snapshot = client.dashboard_stats().await.unwrap();
    assert_eq!(snapshot.stats.total_scraped, 120);
    assert_eq!(snapshot.stats.fake_detected, 40);
    assert_eq!(snapshot.stats.real_verified, 80);
    assert_eq!(snapshot.category_distribution[0].name, "Health");
}

#[tokio::test]
async fn fake_news_filters_by_category() {
    let client = client_for(spawn_backend(stub_router()).await);
    let items = client.fake_news().await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2].severity, "");

    let mut filter = FeedFilter::default();
    filter.select_category(CategoryFilter::parse("Finance"));
    let ids: Vec<u64> = filter.apply(&items).iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn real_news_decode() {
    let client = client_for(spawn_backend(stub_router()).await);
    let items = client.real_news().await.unwrap();

    assert_eq!(items[0].source_name, "RBI");
    assert_eq!(items[0].impact_level, "high");
    assert!(items[0].verification_methods.is_empty());
}

#[tokio::test]
async fn verify_appends_one_verdict_turn() {
    let client = client_for(spawn_backend(stub_router()).await);
    let mut session = ChatSession::new(chrono::Utc::now());

    session.set_input("  Garlic cures flu ");
    let turn = session.send(&client).await.unwrap().clone();

    // greeting, user, verdict
    assert_eq!(session.transcript().len(), 3);
    assert_eq!(session.pending_count(), 0);
    assert_eq!(session.state(), ChatState::Idle);
    // the claim goes out exactly as typed
    assert_eq!(turn.body, "Checked:   Garlic cures flu ");

    let verdict = turn.verdict.unwrap();
    assert_eq!(verdict.label, "False");
    assert_eq!(verdict.confidence_score, 0.12);
    assert_eq!(verdict.source_list, vec!["Official Database", "Web Verification"]);
}

#[tokio::test]
async fn verify_server_error_becomes_error_turn() {
    let router = Router::new().route("/verify", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let client = client_for(spawn_backend(router).await);
    let mut session = ChatSession::new(chrono::Utc::now());

    session.set_input("Is the dam about to break?");
    let turn = session.send(&client).await.unwrap();
    assert!(turn.is_error);
    assert_eq!(turn.body, CONNECTION_ERROR);
    assert_eq!(session.transcript().len(), 3);
    assert_eq!(session.state(), ChatState::Idle);
}

#[tokio::test]
async fn verify_connection_refused_becomes_error_turn() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    let mut session = ChatSession::new(chrono::Utc::now());
    session.set_input("Flood warning in Chennai");

    let turn = session.send(&client).await.unwrap();
    assert!(turn.is_error);
    assert_eq!(session.pending_count(), 0);
}

#[tokio::test]
async fn fetcher_loads_parsed_body() {
    let client = client_for(spawn_backend(stub_router()).await);
    let mut fetcher: UrlFetcher<Vec<u32>> = UrlFetcher::new(client.clone());
    let mut rx = fetcher.subscribe();
    assert!(rx.borrow().is_loading());

    fetcher.set_url(client.url("/fast"));
    assert_eq!(settled(&mut rx).await, FetchState::Loaded(vec![2]));
}

#[tokio::test]
async fn fetcher_non_success_reports_message() {
    let client = client_for(spawn_backend(stub_router()).await);
    let mut fetcher: UrlFetcher<Vec<u32>> = UrlFetcher::new(client.clone());
    let mut rx = fetcher.subscribe();

    fetcher.set_url(client.url("/broken"));
    let state = settled(&mut rx).await;
    assert_eq!(state.error(), Some("Failed to fetch data"));
    assert!(state.data().is_none());
}

#[tokio::test]
async fn fetcher_discards_superseded_response() {
    let client = client_for(spawn_backend(stub_router()).await);
    let mut fetcher: UrlFetcher<Vec<u32>> = UrlFetcher::new(client.clone());
    let mut rx = fetcher.subscribe();

    fetcher.set_url(client.url("/slow"));
    fetcher.set_url(client.url("/fast"));
    assert_eq!(settled(&mut rx).await, FetchState::Loaded(vec![2]));

    // the slow response lands after this and must not overwrite
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(*rx.borrow(), FetchState::Loaded(vec![2]));
}
