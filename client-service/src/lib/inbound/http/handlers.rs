use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;

pub mod authenticate;
pub mod create_client;
pub mod delete_client;
pub mod get_client;
pub mod list_clients;
pub mod update_client;
pub mod verify_token;

/// Client record as echoed back to callers.
///
/// `mot_de_passe` is the stored hash, never the submitted plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientResponse {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub adresse: String,
    pub email: String,
    pub mot_de_passe: String,
}

impl From<&Client> for ClientResponse {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.0,
            nom: client.nom.clone(),
            prenom: client.prenom.clone(),
            date_naissance: client.date_naissance.clone(),
            adresse: client.adresse.clone(),
            email: client.email.as_str().to_string(),
            mot_de_passe: client.mot_de_passe.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400 with the full set of violated-field messages.
    Validation(Vec<String>),
    BadRequest(String),
    /// 403, no token supplied at all.
    Forbidden(String),
    /// 401, bad or expired token.
    Unauthorized(String),
    /// 401 on login with a wrong password; body carries a null accessToken.
    InvalidPassword,
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::InvalidPassword => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "accessToken": null,
                    "message": "Mot de passe invalide!"
                })),
            )
                .into_response(),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Internal(detail) => {
                // Internal detail goes to the log, never to the caller.
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Une erreur interne est survenue." })),
                )
                    .into_response()
            }
        }
    }
}

/// Bodies that never reach deserialization (absent, wrong content type,
/// malformed JSON, missing fields) all answer with the same 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest("Le contenu ne peut pas être vide !".to_string())
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(id) => {
                ApiError::NotFound(format!("Client non trouvé avec l'id {}.", id))
            }
            ClientError::NotFoundByEmail(_) => {
                ApiError::NotFound("Client non trouvé.".to_string())
            }
            ClientError::InvalidCredentials => ApiError::InvalidPassword,
            ClientError::InvalidClientId(e) => ApiError::BadRequest(e.to_string()),
            ClientError::InvalidEmail(_) => {
                ApiError::BadRequest("L'adresse email est invalide.".to_string())
            }
            ClientError::Password(_) | ClientError::DatabaseError(_) | ClientError::Unknown(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}
