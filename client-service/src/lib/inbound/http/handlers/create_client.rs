use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ClientResponse;
use crate::domain::client::models::CreateClientCommand;
use crate::domain::client::models::EmailAddress;
use crate::domain::client::ports::ClientServicePort;
use crate::inbound::http::router::AppState;

const PASSWORD_MIN_LENGTH: usize = 6;

pub async fn create_client(
    State(state): State<AppState>,
    body: Result<Json<CreateClientRequest>, JsonRejection>,
) -> Result<Json<ClientResponse>, ApiError> {
    let Json(body) = body?;
    let command = body.try_into_command().map_err(ApiError::Validation)?;

    state
        .client_service
        .create_client(command)
        .await
        .map_err(ApiError::from)
        .map(|ref client| Json(client.into()))
}

/// HTTP request body for creating a client (raw JSON).
///
/// Every field defaults to empty so absent fields surface as validation
/// messages rather than a deserialization rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateClientRequest {
    nom: String,
    prenom: String,
    date_naissance: String,
    adresse: String,
    email: String,
    mot_de_passe: String,
}

impl CreateClientRequest {
    /// Validate every field and collect all violations together.
    fn try_into_command(self) -> Result<CreateClientCommand, Vec<String>> {
        let mut errors = Vec::new();

        let nom = self.nom.trim();
        if nom.is_empty() {
            errors.push("Le champ 'nom' est requis.".to_string());
        }

        let prenom = self.prenom.trim();
        if prenom.is_empty() {
            errors.push("Le champ 'prenom' est requis.".to_string());
        }

        let date_naissance = self.date_naissance.trim();
        if date_naissance.is_empty() {
            errors.push("Le champ 'date_naissance' est requis.".to_string());
        }

        let adresse = self.adresse.trim();
        if adresse.is_empty() {
            errors.push("Le champ 'adresse' est requis.".to_string());
        }

        let email = match EmailAddress::new(&self.email) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push("L'adresse email est invalide.".to_string());
                None
            }
        };

        if self.mot_de_passe.chars().count() < PASSWORD_MIN_LENGTH {
            errors.push(format!(
                "Le mot de passe doit contenir au moins {} caractères.",
                PASSWORD_MIN_LENGTH
            ));
        }

        match email {
            Some(email) if errors.is_empty() => Ok(CreateClientCommand {
                nom: nom.to_string(),
                prenom: prenom.to_string(),
                date_naissance: date_naissance.to_string(),
                adresse: adresse.to_string(),
                email,
                mot_de_passe: self.mot_de_passe,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateClientRequest {
        CreateClientRequest {
            nom: "Doe".to_string(),
            prenom: "John".to_string(),
            date_naissance: "1989-12-31".to_string(),
            adresse: "123 Main St".to_string(),
            email: "john.doe@example.com".to_string(),
            mot_de_passe: "securepw".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        let command = valid_request().try_into_command().unwrap();
        assert_eq!(command.nom, "Doe");
        assert_eq!(command.email.as_str(), "john.doe@example.com");
    }

    #[test]
    fn test_email_is_normalized() {
        let mut request = valid_request();
        request.email = "  John.Doe@EXAMPLE.com ".to_string();

        let command = request.try_into_command().unwrap();
        assert_eq!(command.email.as_str(), "john.doe@example.com");
    }

    #[test]
    fn test_all_violations_reported_together() {
        let request = CreateClientRequest::default();

        let errors = request.try_into_command().unwrap_err();
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        let mut request = valid_request();
        request.nom = "   ".to_string();
        request.adresse = "\t".to_string();

        let errors = request.try_into_command().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("nom"));
        assert!(errors[1].contains("adresse"));
    }

    #[test]
    fn test_short_password_rejected() {
        let mut request = valid_request();
        request.mot_de_passe = "abc".to_string();

        let errors = request.try_into_command().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("mot de passe"));
    }
}
