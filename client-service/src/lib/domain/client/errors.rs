use thiserror::Error;

/// Error for ClientId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientIdError {
    #[error("Invalid client id: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for event publishing operations
#[derive(Debug, Clone, Error)]
pub enum EventPublisherError {
    #[error("Failed to serialize event: {0}")]
    SerializationFailed(String),

    #[error("Failed to publish event to broker: {0}")]
    PublishFailed(String),
}

/// Top-level error for all client-related operations
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("Invalid client id: {0}")]
    InvalidClientId(#[from] ClientIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password error: {0}")]
    Password(String),

    #[error("Client not found with id {0}")]
    NotFound(i64),

    #[error("Client not found with email: {0}")]
    NotFoundByEmail(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<auth::PasswordError> for ClientError {
    fn from(err: auth::PasswordError) -> Self {
        ClientError::Password(err.to_string())
    }
}
