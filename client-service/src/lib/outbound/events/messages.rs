use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::client::events::ClientCreatedEvent;
use crate::domain::client::events::ClientDeletedEvent;
use crate::domain::client::events::ClientUpdatedEvent;

/// Wire message for the creation queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientCreatedMessage {
    pub event_id: String,
    pub client_id: i64,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub adresse: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&ClientCreatedEvent> for ClientCreatedMessage {
    fn from(event: &ClientCreatedEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            client_id: event.client_id,
            nom: event.nom.clone(),
            prenom: event.prenom.clone(),
            date_naissance: event.date_naissance.clone(),
            adresse: event.adresse.clone(),
            email: event.email.clone(),
            created_at: event.created_at,
        }
    }
}

/// Wire message for the update queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientUpdatedMessage {
    pub event_id: String,
    pub client_id: i64,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub adresse: String,
    pub email: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&ClientUpdatedEvent> for ClientUpdatedMessage {
    fn from(event: &ClientUpdatedEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            client_id: event.client_id,
            nom: event.nom.clone(),
            prenom: event.prenom.clone(),
            date_naissance: event.date_naissance.clone(),
            adresse: event.adresse.clone(),
            email: event.email.clone(),
            updated_at: event.updated_at,
        }
    }
}

/// Wire message for the deletion queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDeletedMessage {
    pub event_id: String,
    pub client_id: i64,
    pub deleted_at: DateTime<Utc>,
}

impl From<&ClientDeletedEvent> for ClientDeletedMessage {
    fn from(event: &ClientDeletedEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            client_id: event.client_id,
            deleted_at: event.deleted_at,
        }
    }
}
