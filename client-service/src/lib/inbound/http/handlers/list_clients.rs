use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::ClientResponse;
use crate::domain::client::ports::ClientServicePort;
use crate::inbound::http::middleware::AuthenticatedClient;
use crate::inbound::http::router::AppState;

pub async fn list_clients(
    State(state): State<AppState>,
    _auth: AuthenticatedClient,
) -> Result<Json<Vec<ClientResponse>>, ApiError> {
    state
        .client_service
        .list_clients()
        .await
        .map_err(ApiError::from)
        .map(|clients| Json(clients.iter().map(ClientResponse::from).collect()))
}
