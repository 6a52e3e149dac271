use std::fmt;
use std::str::FromStr;

use crate::domain::client::errors::ClientIdError;
use crate::domain::client::errors::EmailError;

/// Client aggregate entity.
///
/// Represents a registered client. `mot_de_passe` always holds the Argon2id
/// hash; plaintext never crosses this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub adresse: String,
    pub email: EmailAddress,
    pub mot_de_passe: String,
}

/// Client unique identifier, assigned by the store at insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub i64);

impl ClientId {
    /// Parse a client ID from its decimal string form.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, ClientIdError> {
        s.parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(ClientId)
            .ok_or_else(|| ClientIdError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type.
///
/// Normalized (trimmed, lowercased) before validation against RFC 5322
/// grammar. The normalized form is what gets stored and looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a validated, normalized email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailError> {
        let normalized = email.as_ref().trim().to_lowercase();

        email_address::EmailAddress::from_str(&normalized)
            .map(|_| EmailAddress(normalized))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Record without an id, handed to the repository for insertion.
///
/// `mot_de_passe` is already hashed by the time this exists.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub adresse: String,
    pub email: EmailAddress,
    pub mot_de_passe: String,
}

/// Command to create a new client, carrying the plaintext password.
///
/// Built by the HTTP validator; the service hashes the password before it
/// reaches persistence.
#[derive(Debug)]
pub struct CreateClientCommand {
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub adresse: String,
    pub email: EmailAddress,
    pub mot_de_passe: String,
}

/// Command to replace an existing client record in full.
///
/// Partial updates are not supported; every field is resent by the caller.
#[derive(Debug)]
pub struct UpdateClientCommand {
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub adresse: String,
    pub email: EmailAddress,
    pub mot_de_passe: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_from_string() {
        let id = ClientId::from_string("42").unwrap();
        assert_eq!(id, ClientId(42));
    }

    #[test]
    fn test_client_id_rejects_garbage() {
        assert!(ClientId::from_string("abc").is_err());
        assert!(ClientId::from_string("").is_err());
        assert!(ClientId::from_string("-1").is_err());
        assert!(ClientId::from_string("0").is_err());
    }

    #[test]
    fn test_email_normalization() {
        let email = EmailAddress::new("  John.Doe@EXAMPLE.com ").unwrap();
        assert_eq!(email.as_str(), "john.doe@example.com");
    }

    #[test]
    fn test_email_rejects_invalid() {
        assert!(EmailAddress::new("not-an-email").is_err());
        assert!(EmailAddress::new("").is_err());
    }
}
