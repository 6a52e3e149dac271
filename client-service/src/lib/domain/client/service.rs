use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::client::errors::ClientError;
use crate::domain::client::events::ClientCreatedEvent;
use crate::domain::client::events::ClientDeletedEvent;
use crate::domain::client::events::ClientUpdatedEvent;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::CreateClientCommand;
use crate::domain::client::models::EmailAddress;
use crate::domain::client::models::NewClient;
use crate::domain::client::models::UpdateClientCommand;
use crate::domain::client::ports::ClientRepository;
use crate::domain::client::ports::ClientServicePort;
use crate::domain::client::ports::EventPublisher;

/// Domain service implementation for client operations.
///
/// Orchestrates hashing, persistence, and event notification behind the
/// injected ports.
pub struct ClientService<CR, EP>
where
    CR: ClientRepository,
    EP: EventPublisher,
{
    repository: Arc<CR>,
    event_publisher: Arc<EP>,
    password_hasher: auth::PasswordHasher,
}

impl<CR, EP> ClientService<CR, EP>
where
    CR: ClientRepository,
    EP: EventPublisher,
{
    pub fn new(repository: Arc<CR>, event_publisher: Arc<EP>) -> Self {
        Self {
            repository,
            event_publisher,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<CR, EP> ClientServicePort for ClientService<CR, EP>
where
    CR: ClientRepository,
    EP: EventPublisher,
{
    async fn create_client(&self, command: CreateClientCommand) -> Result<Client, ClientError> {
        let mot_de_passe = self.password_hasher.hash(&command.mot_de_passe)?;

        let record = NewClient {
            nom: command.nom,
            prenom: command.prenom,
            date_naissance: command.date_naissance,
            adresse: command.adresse,
            email: command.email,
            mot_de_passe,
        };

        let created = self.repository.insert(record).await?;

        let event = ClientCreatedEvent::new(&created);
        if let Err(e) = self.event_publisher.publish_client_created(&event).await {
            tracing::error!(
                client_id = created.id.0,
                "Failed to publish ClientCreated event: {}",
                e
            );
        }

        Ok(created)
    }

    async fn get_client(&self, id: &ClientId) -> Result<Client, ClientError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ClientError::NotFound(id.0))
    }

    async fn get_client_by_email(&self, email: &EmailAddress) -> Result<Client, ClientError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| ClientError::NotFoundByEmail(email.as_str().to_string()))
    }

    async fn list_clients(&self) -> Result<Vec<Client>, ClientError> {
        self.repository.list_all().await
    }

    async fn update_client(
        &self,
        id: &ClientId,
        command: UpdateClientCommand,
    ) -> Result<Client, ClientError> {
        // Full replacement: the stored hash is recomputed from the submitted
        // password, so plaintext never reaches the repository.
        let mot_de_passe = self.password_hasher.hash(&command.mot_de_passe)?;

        let client = Client {
            id: *id,
            nom: command.nom,
            prenom: command.prenom,
            date_naissance: command.date_naissance,
            adresse: command.adresse,
            email: command.email,
            mot_de_passe,
        };

        let updated = self.repository.update(client).await?;

        let event = ClientUpdatedEvent::new(&updated);
        if let Err(e) = self.event_publisher.publish_client_updated(&event).await {
            tracing::error!(
                client_id = updated.id.0,
                "Failed to publish ClientUpdated event: {}",
                e
            );
        }

        Ok(updated)
    }

    async fn delete_client(&self, id: &ClientId) -> Result<(), ClientError> {
        self.repository.delete(id).await?;

        let event = ClientDeletedEvent::new(id.0);
        if let Err(e) = self.event_publisher.publish_client_deleted(&event).await {
            tracing::error!(
                client_id = id.0,
                "Failed to publish ClientDeleted event: {}",
                e
            );
        }

        Ok(())
    }
}
