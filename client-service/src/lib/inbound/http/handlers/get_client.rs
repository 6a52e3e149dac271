use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::ClientResponse;
use crate::domain::client::models::ClientId;
use crate::domain::client::ports::ClientServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<ClientResponse>, ApiError> {
    let client_id =
        ClientId::from_string(&client_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .client_service
        .get_client(&client_id)
        .await
        .map_err(ApiError::from)
        .map(|ref client| Json(client.into()))
}
