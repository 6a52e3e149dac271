use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::create_client::create_client;
use super::handlers::delete_client::delete_client;
use super::handlers::get_client::get_client;
use super::handlers::list_clients::list_clients;
use super::handlers::update_client::update_client;
use super::handlers::verify_token::verify_token;
use crate::domain::client::service::ClientService;
use crate::outbound::events::KafkaEventProducer;
use crate::outbound::repositories::PostgresClientRepository;

#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<ClientService<PostgresClientRepository, KafkaEventProducer>>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
}

async fn welcome() -> Json<serde_json::Value> {
    Json(json!({ "message": "Bienvenue dans notre application API." }))
}

pub fn create_router(
    client_service: Arc<ClientService<PostgresClientRepository, KafkaEventProducer>>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_hours: i64,
) -> Router {
    let state = AppState {
        client_service,
        authenticator,
        jwt_expiration_hours,
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // Protection lives on the handlers themselves: list, update, delete and
    // verify-token require the AuthenticatedClient extractor.
    Router::new()
        .route("/", get(welcome))
        .route("/customers", post(create_client).get(list_clients))
        .route(
            "/customers/:client_id",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route("/login", post(authenticate))
        .route("/verify-token", get(verify_token))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
