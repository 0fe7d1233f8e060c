//! Axum gateway for the portfolio site: content read/write, SSE change
//! stream, per-session admin gate, and the AI chat endpoint.
//!
//! The gateway owns the live ContentDocument. On boot it loads the stored
//! document (NotFound keeps the built-in defaults); a background task folds
//! store change notifications into the live copy so every save — including
//! one from another gateway instance over the same database — re-renders
//! through `GET /api/v1/content` and the SSE stream. The AI credential and
//! admin PIN stay on this side; the static front end never sees either.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{
        sse::{Event, Sse},
        IntoResponse,
    },
    routing::{get, post},
    Json, Router,
};
use dashmap::DashMap;
use folio_core::{
    AdminGate, AssistantBridge, ContentDocument, ContentStore, SiteConfig, SledContentStore,
    TriggerOutcome,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Opaque per-visit session id; the front end generates one and sends it
/// with every admin-gate request.
const SESSION_HEADER: &str = "x-folio-session";

const SSE_KEEPALIVE: Duration = Duration::from_secs(30);

#[derive(Clone)]
struct AppState {
    config: Arc<SiteConfig>,
    store: Arc<dyn ContentStore>,
    /// Live displayed document: defaults until the first successful load,
    /// then wholesale-replaced on every change notification.
    document: Arc<RwLock<ContentDocument>>,
    /// One admin gate per session id. Never persisted; restart locks everyone.
    gates: Arc<DashMap<String, AdminGate>>,
    bridge: Arc<AssistantBridge>,
}

#[derive(Deserialize)]
struct SessionBody {
    session: String,
}

#[derive(Deserialize)]
struct PinBody {
    session: String,
    pin: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TriggerReply {
    prompt_pin: bool,
    panel_open: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PinReply {
    unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ChatBody {
    question: String,
}

#[derive(Serialize)]
struct ChatReply {
    reply: String,
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn get_content(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.document.read().await.clone())
}

/// Full-document overwrite. Requires an unlocked admin session; the store
/// resolves concurrent saves last-write-wins.
async fn put_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(doc): Json<ContentDocument>,
) -> impl IntoResponse {
    if !session_unlocked(&state, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": "admin session required" })),
        );
    }
    match state.store.save(&doc).await {
        Ok(()) => {
            *state.document.write().await = doc;
            (StatusCode::OK, Json(serde_json::json!({ "saved": true })))
        }
        Err(e) => {
            // The admin keeps the draft client-side and retries manually.
            tracing::error!("content save failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "Failed to save changes." })),
            )
        }
    }
}

fn session_unlocked(state: &AppState, headers: &HeaderMap) -> bool {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|id| state.gates.get(id).map(|g| g.is_unlocked()))
        .unwrap_or(false)
}

/// SSE stream of document replacements, with periodic keepalive comments.
async fn content_stream(
    State(state): State<AppState>,
) -> Sse<impl futures_util::Stream<Item = Result<Event, std::convert::Infallible>> + Send + 'static>
{
    use async_stream::stream;
    let mut rx = state.store.subscribe();
    let stream = stream! {
        loop {
            tokio::select! {
                r = rx.recv() => match r {
                    Ok(doc) => {
                        if let Ok(json) = serde_json::to_string(&doc) {
                            yield Ok(Event::default().event("content").data(json));
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::debug!("content stream lagged by {} updates", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
                _ = tokio::time::sleep(SSE_KEEPALIVE) => {
                    yield Ok(Event::default().comment("keepalive"));
                }
            }
        }
    };
    Sse::new(stream)
}

/// One activation of the hidden admin trigger (the logo, in the shipped
/// front end).
async fn admin_trigger(
    State(state): State<AppState>,
    Json(body): Json<SessionBody>,
) -> impl IntoResponse {
    let mut gate = state
        .gates
        .entry(body.session)
        .or_insert_with(|| AdminGate::new(state.config.admin_pin.clone()));
    let outcome = gate.trigger();
    Json(TriggerReply {
        prompt_pin: outcome == TriggerOutcome::PinPromptOpened,
        panel_open: outcome == TriggerOutcome::PanelOpened,
    })
}

async fn admin_pin(
    State(state): State<AppState>,
    Json(body): Json<PinBody>,
) -> impl IntoResponse {
    let unlocked = state
        .gates
        .get_mut(&body.session)
        .map(|mut g| g.submit_pin(&body.pin))
        .unwrap_or(false);
    Json(PinReply {
        unlocked,
        message: (!unlocked).then(|| "Incorrect PIN".to_string()),
    })
}

/// Visitor chat. Never an error to the client: bridge failures collapse to
/// the fixed fallback reply.
async fn chat(State(state): State<AppState>, Json(body): Json<ChatBody>) -> impl IntoResponse {
    let snapshot = state.document.read().await.clone();
    let reply = state.bridge.ask(&body.question, &snapshot).await;
    Json(ChatReply { reply })
}

fn app(state: AppState) -> Router {
    let site_dir = state.config.site_dir.clone();
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/content", get(get_content).put(put_content))
        .route("/api/v1/content/stream", get(content_stream))
        .route("/api/v1/admin/trigger", post(admin_trigger))
        .route("/api/v1/admin/pin", post(admin_pin))
        .route("/api/v1/chat", post(chat))
        .fallback_service(ServeDir::new(site_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Keeps the live document in sync with store change notifications.
fn spawn_change_fold(store: Arc<dyn ContentStore>, document: Arc<RwLock<ContentDocument>>) {
    let mut rx = store.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(doc) => *document.write().await = doc,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("change fold lagged by {} updates", n);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[folio-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("info,folio_core=debug,folio_gateway=debug")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match SiteConfig::from_env() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("[folio-gateway] configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let store: Arc<dyn ContentStore> = match SledContentStore::open_path(&config.data_path) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            eprintln!("[folio-gateway] cannot open content store at {}: {}", config.data_path, e);
            std::process::exit(1);
        }
    };

    // Store-read failure is not fatal: serve the defaults and log it. The
    // stored document is only ever created by the first admin save.
    let initial = match store.load().await {
        Ok(Some(doc)) => {
            tracing::info!("content document loaded from store");
            doc
        }
        Ok(None) => {
            tracing::info!("no stored content yet; serving built-in defaults");
            ContentDocument::default_content()
        }
        Err(e) => {
            tracing::warn!("content load failed ({}); serving built-in defaults", e);
            ContentDocument::default_content()
        }
    };

    let document = Arc::new(RwLock::new(initial));
    spawn_change_fold(store.clone(), document.clone());

    let state = AppState {
        bridge: Arc::new(AssistantBridge::from_config(&config)),
        gates: Arc::new(DashMap::new()),
        store,
        document,
        config: config.clone(),
    };

    let addr = format!("{}:{}", config.bind_addr, config.port);
    tracing::info!("folio-gateway listening on {} (site dir: {})", addr, config.site_dir);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("[folio-gateway] cannot bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app(state)).await {
        eprintln!("[folio-gateway] server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use folio_core::{AiMode, MemoryContentStore, MOCK_REPLY};
    use tower::ServiceExt;

    fn test_config() -> SiteConfig {
        SiteConfig {
            bind_addr: "127.0.0.1".to_string(),
            port: 0,
            data_path: "./data/test".to_string(),
            site_dir: "./site".to_string(),
            admin_pin: "2427".to_string(),
            ai_mode: AiMode::Mock,
            ai_model: None,
            ai_api_key: None,
        }
    }

    fn test_state() -> AppState {
        let config = Arc::new(test_config());
        let store: Arc<dyn ContentStore> = Arc::new(MemoryContentStore::new());
        AppState {
            bridge: Arc::new(AssistantBridge::from_config(&config)),
            gates: Arc::new(DashMap::new()),
            store,
            document: Arc::new(RwLock::new(ContentDocument::default_content())),
            config,
        }
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn content_serves_defaults_before_first_save() {
        let router = app(test_state());
        let response = router
            .oneshot(Request::get("/api/v1/content").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["profile"]["name"], "Janikashree R S");
        assert_eq!(json["portfolio"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn save_without_unlocked_session_is_rejected() {
        let router = app(test_state());
        let doc = ContentDocument::default_content();
        let response = router
            .oneshot(json_request(
                Method::PUT,
                "/api/v1/content",
                serde_json::to_value(&doc).unwrap(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_flow_unlocks_and_saves() {
        let state = test_state();
        let router = app(state.clone());
        let session = serde_json::json!({ "session": "s1" });

        for expect_prompt in [false, false, true] {
            let response = router
                .clone()
                .oneshot(json_request(
                    Method::POST,
                    "/api/v1/admin/trigger",
                    session.clone(),
                ))
                .await
                .unwrap();
            let json = body_json(response).await;
            assert_eq!(json["promptPin"], expect_prompt);
        }

        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/admin/pin",
                serde_json::json!({ "session": "s1", "pin": "2427" }),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["unlocked"], true);

        let mut doc = ContentDocument::default_content();
        doc.profile.name = "Edited".to_string();
        let mut request = json_request(
            Method::PUT,
            "/api/v1/content",
            serde_json::to_value(&doc).unwrap(),
        );
        request
            .headers_mut()
            .insert(SESSION_HEADER, "s1".parse().unwrap());
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Live copy replaced and the store holds the full document.
        let response = router
            .oneshot(Request::get("/api/v1/content").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await["profile"]["name"], "Edited");
        let stored = state.store.load().await.unwrap().unwrap();
        assert_eq!(stored, doc);
    }

    #[tokio::test]
    async fn wrong_pin_relocks_the_session() {
        let router = app(test_state());
        let session = serde_json::json!({ "session": "s2" });
        for _ in 0..3 {
            router
                .clone()
                .oneshot(json_request(
                    Method::POST,
                    "/api/v1/admin/trigger",
                    session.clone(),
                ))
                .await
                .unwrap();
        }

        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/admin/pin",
                serde_json::json!({ "session": "s2", "pin": "0000" }),
            ))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["unlocked"], false);
        assert_eq!(json["message"], "Incorrect PIN");

        let mut request = json_request(
            Method::PUT,
            "/api/v1/content",
            serde_json::to_value(ContentDocument::default_content()).unwrap(),
        );
        request
            .headers_mut()
            .insert(SESSION_HEADER, "s2".parse().unwrap());
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn pin_for_unknown_session_is_rejected() {
        let router = app(test_state());
        let response = router
            .oneshot(json_request(
                Method::POST,
                "/api/v1/admin/pin",
                serde_json::json!({ "session": "ghost", "pin": "2427" }),
            ))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["unlocked"], false);
    }

    #[tokio::test]
    async fn chat_in_mock_mode_returns_canned_reply() {
        let router = app(test_state());
        let response = router
            .oneshot(json_request(
                Method::POST,
                "/api/v1/chat",
                serde_json::json!({ "question": "What tools does she use?" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["reply"], MOCK_REPLY);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let router = app(test_state());
        let response = router
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
