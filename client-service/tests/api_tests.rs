mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_welcome() {
    let app = TestApp::spawn().await;

    let response = app.get("/").send().await.expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Bienvenue dans notre application API.");
}

#[tokio::test]
async fn test_create_client_reports_all_validation_errors() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/customers")
        .json(&json!({
            "nom": "",
            "prenom": "  ",
            "date_naissance": "",
            "adresse": "",
            "email": "not-an-email",
            "mot_de_passe": "abc"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("errors should be an array");
    assert_eq!(errors.len(), 6);
}

#[tokio::test]
async fn test_create_client_missing_fields_are_validation_errors() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/customers")
        .json(&json!({ "nom": "Doe" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("errors should be an array");
    assert_eq!(errors.len(), 5);
}

#[tokio::test]
async fn test_create_client_without_json_content_type() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/customers")
        .body(r#"{"nom": "Doe"}"#)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Le contenu ne peut pas être vide !");
}

#[tokio::test]
async fn test_update_client_with_missing_field() {
    let app = TestApp::spawn().await;
    let token = app.token_for(1);

    let response = app
        .put("/customers/1")
        .header("x-access-token", &token)
        .json(&json!({
            "nom": "Doe",
            "prenom": "John",
            "date_naissance": "1989-12-31",
            "adresse": "123 Main St",
            "email": "john.doe@example.com"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Le contenu ne peut pas être vide !");
}

#[tokio::test]
async fn test_login_with_missing_field() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/login")
        .json(&json!({ "email": "john.doe@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Le contenu ne peut pas être vide !");
}

#[tokio::test]
async fn test_list_clients_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/customers")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Aucun token fourni!");
}

#[tokio::test]
async fn test_list_clients_with_invalid_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/customers")
        .header("x-access-token", "definitely.not.a-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Non autorisé!");
}

#[tokio::test]
async fn test_update_client_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .put("/customers/1")
        .json(&json!({
            "nom": "Doe",
            "prenom": "John",
            "date_naissance": "1989-12-31",
            "adresse": "123 Main St",
            "email": "john.doe@example.com",
            "mot_de_passe": "securepw"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_client_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .delete("/customers/1")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Aucun token fourni!");
}

#[tokio::test]
async fn test_verify_token_with_raw_token() {
    let app = TestApp::spawn().await;
    let token = app.token_for(42);

    let response = app
        .get("/verify-token")
        .header("x-access-token", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Token valide");
    assert_eq!(body["userId"], 42);
}

#[tokio::test]
async fn test_verify_token_with_bearer_prefix() {
    let app = TestApp::spawn().await;
    let token = app.token_for(42);

    let response = app
        .get("/verify-token")
        .header("x-access-token", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["userId"], 42);
}

#[tokio::test]
async fn test_verify_token_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/verify-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Aucun token fourni!");
}

#[tokio::test]
async fn test_get_client_with_malformed_id() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/customers/abc")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
