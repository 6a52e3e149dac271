use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ClientResponse;
use crate::domain::client::errors::ClientError;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::EmailAddress;
use crate::domain::client::models::UpdateClientCommand;
use crate::domain::client::ports::ClientServicePort;
use crate::inbound::http::middleware::AuthenticatedClient;
use crate::inbound::http::router::AppState;

/// HTTP request body replacing a client record in full.
///
/// Updates are not merges; every field must be resent.
#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub adresse: String,
    pub email: String,
    pub mot_de_passe: String,
}

impl UpdateClientRequest {
    fn try_into_command(self) -> Result<UpdateClientCommand, ClientError> {
        let email = EmailAddress::new(&self.email)?;

        Ok(UpdateClientCommand {
            nom: self.nom,
            prenom: self.prenom,
            date_naissance: self.date_naissance,
            adresse: self.adresse,
            email,
            mot_de_passe: self.mot_de_passe,
        })
    }
}

pub async fn update_client(
    State(state): State<AppState>,
    _auth: AuthenticatedClient,
    Path(client_id): Path<String>,
    body: Result<Json<UpdateClientRequest>, JsonRejection>,
) -> Result<Json<ClientResponse>, ApiError> {
    let Json(body) = body?;
    let client_id =
        ClientId::from_string(&client_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .client_service
        .update_client(&client_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref client| Json(client.into()))
}
