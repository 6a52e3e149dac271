use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::client::models::ClientId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Header carrying the bearer token, with or without a `Bearer ` prefix.
pub const TOKEN_HEADER: &str = "x-access-token";

/// Extractor asserting a valid bearer token on the request.
///
/// A missing header is a distinct failure (403) from an invalid or expired
/// token (401).
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    pub client_id: ClientId,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedClient {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let header = parts
            .headers
            .get(TOKEN_HEADER)
            .ok_or_else(|| ApiError::Forbidden("Aucun token fourni!".to_string()))?;

        let value = header
            .to_str()
            .map_err(|_| ApiError::Unauthorized("Non autorisé!".to_string()))?;

        let token = value.strip_prefix("Bearer ").unwrap_or(value);

        let claims = state.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!("Token validation failed: {}", e);
            ApiError::Unauthorized("Non autorisé!".to_string())
        })?;

        let subject = claims
            .sub
            .ok_or_else(|| ApiError::Unauthorized("Non autorisé!".to_string()))?;

        let client_id = ClientId::from_string(&subject)
            .map_err(|_| ApiError::Unauthorized("Non autorisé!".to_string()))?;

        Ok(AuthenticatedClient { client_id })
    }
}
