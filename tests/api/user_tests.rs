//! User API Tests

use axum::http::StatusCode;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use pretty_assertions::assert_eq;
use serde_json::json;

use user_service::application::dto::UserResponse;

use crate::common::{ana_ruiz, create_user, test_server, user_body};

/// Create, read, update, delete, then read again
#[tokio::test]
async fn test_user_lifecycle_scenario() {
    let server = test_server();

    // Create
    let created = create_user(&server, &ana_ruiz()).await;
    assert_eq!(created.full_name, "Ana Ruiz");
    let id = created.id.expect("created user has an id");
    let path = format!("/api/users/{}", id);

    // Read
    let response = server.get(&path).await;
    response.assert_status_ok();
    assert_eq!(response.json::<UserResponse>(), created);

    // Update
    let response = server
        .put(&path)
        .json(&user_body("Ana", "Diaz", "ana@x.com", "555"))
        .await;
    response.assert_status_ok();
    let updated = response.json::<UserResponse>();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.full_name, "Ana Diaz");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    // Delete
    let response = server.delete(&path).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(response.text(), "");

    // Gone
    let response = server.get(&path).await;
    response.assert_status_not_found();
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn test_create_returns_camel_case_json() {
    let server = test_server();

    let response = server.post("/api/users").json(&ana_ruiz()).await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert!(body["id"].is_number());
    assert_eq!(body["firstName"], "Ana");
    assert_eq!(body["lastName"], "Ruiz");
    assert_eq!(body["fullName"], "Ana Ruiz");
    assert_eq!(body["email"], "ana@x.com");
    assert_eq!(body["phoneNumber"], "555");
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test]
async fn test_created_users_have_ids_equal_timestamps_and_full_name() {
    let server = test_server();

    for _ in 0..20 {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        let email: String = SafeEmail().fake();

        let created = create_user(&server, &user_body(&first, &last, &email, "555-0100")).await;

        assert!(created.id.is_some());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.full_name, format!("{} {}", first, last));
    }
}

#[tokio::test]
async fn test_duplicate_email_is_allowed() {
    let server = test_server();

    let first = create_user(&server, &ana_ruiz()).await;
    let second = create_user(&server, &ana_ruiz()).await;

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_list_users() {
    let server = test_server();

    let response = server.get("/api/users").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<UserResponse>>(), vec![]);

    let ana = create_user(&server, &ana_ruiz()).await;
    let bob = create_user(&server, &user_body("Bob", "Stone", "bob@x.com", "777")).await;

    let response = server.get("/api/users").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<UserResponse>>(), vec![ana, bob]);
}

#[tokio::test]
async fn test_get_never_created_user_is_not_found() {
    let server = test_server();

    let response = server.get("/api/users/12345").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn test_update_never_created_user_is_not_found() {
    let server = test_server();

    let response = server.put("/api/users/12345").json(&ana_ruiz()).await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn test_delete_never_created_user_is_not_found() {
    let server = test_server();

    let response = server.delete("/api/users/12345").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn test_repeated_updates_strictly_increase_updated_at() {
    let server = test_server();
    let created = create_user(&server, &ana_ruiz()).await;
    let path = format!("/api/users/{}", created.id.unwrap());

    let mut previous = created.clone();
    for last_name in ["Diaz", "Lopez", "Vega"] {
        let response = server
            .put(&path)
            .json(&user_body("Ana", last_name, "ana@x.com", "555"))
            .await;
        response.assert_status_ok();
        let updated = response.json::<UserResponse>();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > previous.updated_at);
        previous = updated;
    }
}

#[tokio::test]
async fn test_create_with_invalid_email_is_bad_request() {
    let server = test_server();

    let response = server
        .post("/api/users")
        .json(&user_body("Ana", "Ruiz", "not-an-email", "555"))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["errors"][0]["field"], "email");
}

#[tokio::test]
async fn test_create_with_blank_name_is_bad_request() {
    let server = test_server();

    let response = server
        .post("/api/users")
        .json(&user_body("  ", "Ruiz", "ana@x.com", "555"))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_with_missing_fields_is_bad_request() {
    let server = test_server();

    let response = server
        .post("/api/users")
        .json(&json!({ "firstName": "Ana" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_without_json_content_type_is_bad_request() {
    let server = test_server();

    let response = server.post("/api/users").text("firstName=Ana").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_with_invalid_body_is_bad_request() {
    let server = test_server();
    let created = create_user(&server, &ana_ruiz()).await;

    let response = server
        .put(&format!("/api/users/{}", created.id.unwrap()))
        .json(&user_body("Ana", "", "ana@x.com", "555"))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let server = test_server();

    server.get("/api/users/abc").await.assert_status_bad_request();
    server.delete("/api/users/abc").await.assert_status_bad_request();
}
