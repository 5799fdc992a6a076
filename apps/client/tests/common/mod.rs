//! Shared test harness: an in-process stub of the StudySync backend.
//!
//! Serves the same paths and JSON shapes as the real API so `ApiClient`
//! can be exercised over a real socket.

pub mod fixtures;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

/// Token the stub accepts; anything else gets a 401.
pub const TEST_TOKEN: &str = "test-token";

/// Mutable backend state shared with the test body.
#[derive(Clone, Default)]
pub struct StubState {
    pub cards: Arc<Mutex<Vec<Value>>>,
    pub notes: Arc<Mutex<Vec<Value>>>,
    /// `(card_id, difficulty)` in the order reviews arrived.
    pub reviews: Arc<Mutex<Vec<(String, String)>>>,
    /// When set, the review endpoint answers 500.
    pub fail_reviews: Arc<Mutex<bool>>,
    /// `due_only` value from the most recent card list request.
    pub last_due_only: Arc<Mutex<Option<String>>>,
}

impl StubState {
    pub fn with_cards(cards: Vec<Value>) -> Self {
        let state = Self::default();
        *state.cards.lock().unwrap() = cards;
        state
    }
}

/// Bind an ephemeral port, serve the stub in the background, and return
/// its address.
pub async fn spawn_stub(state: StubState) -> SocketAddr {
    let app = Router::new()
        .route("/health", get(health))
        .route("/api/flashcards", get(list_flashcards))
        .route("/api/flashcards/stats", get(flashcard_stats))
        .route("/api/flashcards/:id/review", post(review_flashcard))
        .route("/api/notes", get(list_notes))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });
    addr
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{addr}")
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {TEST_TOKEN}");
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Invalid authentication credentials"})),
    )
        .into_response()
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

async fn list_flashcards(
    State(state): State<StubState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    *state.last_due_only.lock().unwrap() = params.get("due_only").cloned();
    let cards = state.cards.lock().unwrap().clone();
    Json(Value::Array(cards)).into_response()
}

async fn review_flashcard(
    State(state): State<StubState>,
    headers: HeaderMap,
    Path(card_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if *state.fail_reviews.lock().unwrap() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "scheduling failed"})),
        )
            .into_response();
    }

    let difficulty = body["difficulty"].as_str().unwrap_or("medium").to_string();
    state
        .reviews
        .lock()
        .unwrap()
        .push((card_id.clone(), difficulty.clone()));

    let mut cards = state.cards.lock().unwrap();
    match cards.iter_mut().find(|c| c["id"] == card_id.as_str()) {
        Some(card) => {
            let reviewed = card["times_reviewed"].as_u64().unwrap_or(0) + 1;
            card["times_reviewed"] = json!(reviewed);
            card["difficulty"] = json!(difficulty);
            card["last_reviewed"] = json!(Utc::now().to_rfc3339());
            card["next_review"] = json!((Utc::now() + Duration::days(3)).to_rfc3339());
            Json(card.clone()).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Flashcard not found"})),
        )
            .into_response(),
    }
}

async fn flashcard_stats(State(state): State<StubState>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let cards = state.cards.lock().unwrap();
    let total_reviews: u64 = cards
        .iter()
        .map(|c| c["times_reviewed"].as_u64().unwrap_or(0))
        .sum();
    Json(json!({
        "total_flashcards": cards.len(),
        "reviewed_at_least_once": cards
            .iter()
            .filter(|c| c["times_reviewed"].as_u64().unwrap_or(0) > 0)
            .count(),
        "due_for_review": cards.len(),
        "total_reviews": total_reviews,
        "accuracy_percentage": 0.0,
    }))
    .into_response()
}

async fn list_notes(State(state): State<StubState>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let notes = state.notes.lock().unwrap().clone();
    Json(Value::Array(notes)).into_response()
}
