use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::client::models::ClientId;
use crate::domain::client::ports::ClientServicePort;
use crate::inbound::http::middleware::AuthenticatedClient;
use crate::inbound::http::router::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteClientResponse {
    pub message: String,
}

pub async fn delete_client(
    State(state): State<AppState>,
    _auth: AuthenticatedClient,
    Path(client_id): Path<String>,
) -> Result<Json<DeleteClientResponse>, ApiError> {
    let client_id =
        ClientId::from_string(&client_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .client_service
        .delete_client(&client_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            Json(DeleteClientResponse {
                message: "Le client a été supprimé avec succès !".to_string(),
            })
        })
}
