use auth::AuthenticationError;
use auth::Claims;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::client::models::EmailAddress;
use crate::domain::client::ports::ClientServicePort;
use crate::inbound::http::router::AppState;

pub async fn authenticate(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(body) = body?;

    // An address that fails grammar checks cannot match any stored row.
    let email = EmailAddress::new(&body.email)
        .map_err(|_| ApiError::NotFound("Client non trouvé.".to_string()))?;

    let client = state
        .client_service
        .get_client_by_email(&email)
        .await
        .map_err(ApiError::from)?;

    let claims = Claims::for_subject(client.id, state.jwt_expiration_hours);

    let result = state
        .authenticator
        .authenticate(&body.mot_de_passe, &client.mot_de_passe, &claims)
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => ApiError::InvalidPassword,
            AuthenticationError::PasswordError(err) => {
                ApiError::Internal(format!("Password verification failed: {}", err))
            }
            AuthenticationError::JwtError(err) => {
                ApiError::Internal(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(Json(LoginResponse {
        id: client.id.0,
        email: client.email.as_str().to_string(),
        access_token: result.access_token,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub mot_de_passe: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponse {
    pub id: i64,
    pub email: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}
