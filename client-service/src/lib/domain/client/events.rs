use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::client::models::Client;

/// Domain event published after a client is created.
///
/// Snapshot of the record for downstream consumers. The password hash is
/// deliberately left out of every event payload.
#[derive(Debug, Clone)]
pub struct ClientCreatedEvent {
    pub event_id: String,
    pub client_id: i64,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub adresse: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl ClientCreatedEvent {
    pub fn new(client: &Client) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            client_id: client.id.0,
            nom: client.nom.clone(),
            prenom: client.prenom.clone(),
            date_naissance: client.date_naissance.clone(),
            adresse: client.adresse.clone(),
            email: client.email.as_str().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Domain event published after a client record is replaced.
#[derive(Debug, Clone)]
pub struct ClientUpdatedEvent {
    pub event_id: String,
    pub client_id: i64,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub adresse: String,
    pub email: String,
    pub updated_at: DateTime<Utc>,
}

impl ClientUpdatedEvent {
    pub fn new(client: &Client) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            client_id: client.id.0,
            nom: client.nom.clone(),
            prenom: client.prenom.clone(),
            date_naissance: client.date_naissance.clone(),
            adresse: client.adresse.clone(),
            email: client.email.as_str().to_string(),
            updated_at: Utc::now(),
        }
    }
}

/// Domain event published after a client row is removed.
///
/// Only the id survives deletion, so that is all the payload carries.
#[derive(Debug, Clone)]
pub struct ClientDeletedEvent {
    pub event_id: String,
    pub client_id: i64,
    pub deleted_at: DateTime<Utc>,
}

impl ClientDeletedEvent {
    pub fn new(client_id: i64) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            client_id,
            deleted_at: Utc::now(),
        }
    }
}
