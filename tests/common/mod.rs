//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum_test::TestServer;
use serde_json::{json, Value};

use user_service::application::dto::UserResponse;
use user_service::config::Settings;
use user_service::startup::{build_router, AppState};

/// Server running the full router over a fresh in-memory store
pub fn test_server() -> TestServer {
    let settings = Settings::in_memory().expect("Failed to build test settings");
    let state = AppState::in_memory(settings);

    TestServer::new(build_router(state)).expect("Failed to start test server")
}

/// Request body for `POST`/`PUT /api/users`
pub fn user_body(first_name: &str, last_name: &str, email: &str, phone_number: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": last_name,
        "email": email,
        "phoneNumber": phone_number,
    })
}

pub fn ana_ruiz() -> Value {
    user_body("Ana", "Ruiz", "ana@x.com", "555")
}

/// Create a user and return the response body
pub async fn create_user(server: &TestServer, body: &Value) -> UserResponse {
    let response = server.post("/api/users").json(body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<UserResponse>()
}
