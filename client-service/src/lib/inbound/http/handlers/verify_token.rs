use axum::Json;
use serde::Serialize;

use crate::inbound::http::middleware::AuthenticatedClient;

#[derive(Debug, Serialize)]
pub struct VerifyTokenResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

pub async fn verify_token(auth: AuthenticatedClient) -> Json<VerifyTokenResponse> {
    Json(VerifyTokenResponse {
        message: "Token valide".to_string(),
        user_id: auth.client_id.0,
    })
}
