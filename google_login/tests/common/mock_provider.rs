//! In-process mock of Google's token and userinfo endpoints
//!
//! Runs a tiny axum server on a fixed port in a dedicated thread with its own
//! runtime, so it survives across every #[tokio::test] runtime in the binary.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::{
    net::TcpStream,
    sync::{
        Arc, LazyLock, Mutex,
        atomic::{AtomicU32, Ordering},
    },
    thread,
    time::Duration,
};

pub const MOCK_PROVIDER_PORT: u16 = 9876;

#[derive(Clone)]
pub struct MockProvider {
    behavior: Arc<Mutex<MockBehavior>>,
    token_hits: Arc<AtomicU32>,
    userinfo_hits: Arc<AtomicU32>,
}

struct MockBehavior {
    fail_exchange: bool,
    profile: Value,
}

impl MockProvider {
    fn new() -> Self {
        Self {
            behavior: Arc::new(Mutex::new(MockBehavior {
                fail_exchange: false,
                profile: default_profile("shopper@example.com"),
            })),
            token_hits: Arc::new(AtomicU32::new(0)),
            userinfo_hits: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Reset hit counters and restore default behavior for the given email
    pub fn reset(&self, email: &str) {
        let mut behavior = self.behavior.lock().expect("mock state lock poisoned");
        behavior.fail_exchange = false;
        behavior.profile = default_profile(email);
        self.token_hits.store(0, Ordering::SeqCst);
        self.userinfo_hits.store(0, Ordering::SeqCst);
    }

    pub fn set_fail_exchange(&self, fail: bool) {
        self.behavior
            .lock()
            .expect("mock state lock poisoned")
            .fail_exchange = fail;
    }

    pub fn set_profile(&self, profile: Value) {
        self.behavior
            .lock()
            .expect("mock state lock poisoned")
            .profile = profile;
    }

    pub fn token_hits(&self) -> u32 {
        self.token_hits.load(Ordering::SeqCst)
    }

    pub fn userinfo_hits(&self) -> u32 {
        self.userinfo_hits.load(Ordering::SeqCst)
    }
}

pub fn default_profile(email: &str) -> Value {
    json!({
        "id": "mock-google-subject",
        "email": email,
        "verified_email": true,
        "name": "Mock Shopper",
        "given_name": "Mock",
        "family_name": "Shopper",
        "picture": "https://example.com/avatar.jpg",
        "locale": "en"
    })
}

async fn token_endpoint(State(state): State<MockProvider>) -> impl IntoResponse {
    state.token_hits.fetch_add(1, Ordering::SeqCst);

    let fail = state
        .behavior
        .lock()
        .expect("mock state lock poisoned")
        .fail_exchange;

    if fail {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid_grant"})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "access_token": "mock-access-token",
            "token_type": "Bearer",
            "expires_in": 3599,
            "scope": "email profile"
        })),
    )
}

async fn userinfo_endpoint(State(state): State<MockProvider>) -> impl IntoResponse {
    state.userinfo_hits.fetch_add(1, Ordering::SeqCst);

    let profile = state
        .behavior
        .lock()
        .expect("mock state lock poisoned")
        .profile
        .clone();

    Json(profile)
}

static MOCK: LazyLock<MockProvider> = LazyLock::new(|| {
    let state = MockProvider::new();
    let router_state = state.clone();

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create mock provider runtime");
        rt.block_on(async move {
            let app = Router::new()
                .route("/token", post(token_endpoint))
                .route("/userinfo", get(userinfo_endpoint))
                .with_state(router_state);

            let listener = tokio::net::TcpListener::bind(("127.0.0.1", MOCK_PROVIDER_PORT))
                .await
                .expect("Failed to bind mock provider port");
            axum::serve(listener, app)
                .await
                .expect("Mock provider server exited");
        });
    });

    // Wait for the listener to come up before any test talks to it
    for _ in 0..50 {
        if TcpStream::connect(("127.0.0.1", MOCK_PROVIDER_PORT)).is_ok() {
            break;
        }
        thread::sleep(Duration::from_millis(20));
    }

    state
});

/// Start the mock provider (idempotent) and return a handle to its state
pub fn ensure_started() -> &'static MockProvider {
    &MOCK
}
