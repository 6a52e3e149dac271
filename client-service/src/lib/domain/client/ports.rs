use async_trait::async_trait;

use crate::domain::client::errors::ClientError;
use crate::domain::client::errors::EventPublisherError;
use crate::domain::client::events::ClientCreatedEvent;
use crate::domain::client::events::ClientDeletedEvent;
use crate::domain::client::events::ClientUpdatedEvent;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::CreateClientCommand;
use crate::domain::client::models::EmailAddress;
use crate::domain::client::models::NewClient;
use crate::domain::client::models::UpdateClientCommand;

/// Port for client domain service operations.
#[async_trait]
pub trait ClientServicePort: Send + Sync + 'static {
    /// Hash the password, persist the record, publish a creation event.
    ///
    /// The store assigns the id; the publish is best-effort and never fails
    /// the call.
    ///
    /// # Errors
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Insert failed
    async fn create_client(&self, command: CreateClientCommand) -> Result<Client, ClientError>;

    /// Retrieve a client by id.
    ///
    /// # Errors
    /// * `NotFound` - No row with this id
    /// * `DatabaseError` - Query failed
    async fn get_client(&self, id: &ClientId) -> Result<Client, ClientError>;

    /// Retrieve a client by normalized email address.
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No row with this email
    /// * `DatabaseError` - Query failed
    async fn get_client_by_email(&self, email: &EmailAddress) -> Result<Client, ClientError>;

    /// Retrieve every client. Empty vector when none exist.
    ///
    /// # Errors
    /// * `DatabaseError` - Query failed
    async fn list_clients(&self) -> Result<Vec<Client>, ClientError>;

    /// Replace the record in full, then publish an update event.
    ///
    /// # Errors
    /// * `NotFound` - No row with this id; nothing is created
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Update failed
    async fn update_client(
        &self,
        id: &ClientId,
        command: UpdateClientCommand,
    ) -> Result<Client, ClientError>;

    /// Remove the record, then publish a deletion event.
    ///
    /// # Errors
    /// * `NotFound` - No row with this id
    /// * `DatabaseError` - Delete failed
    async fn delete_client(&self, id: &ClientId) -> Result<(), ClientError>;
}

/// Persistence operations for the client aggregate.
///
/// Every implementation must bind parameters rather than interpolate values
/// into query text.
#[async_trait]
pub trait ClientRepository: Send + Sync + 'static {
    /// Insert a new record; the store assigns the id.
    ///
    /// # Errors
    /// * `DatabaseError` - Constraint violation or connectivity failure
    async fn insert(&self, client: NewClient) -> Result<Client, ClientError>;

    /// Retrieve a record by id. `None` when no row matches.
    ///
    /// # Errors
    /// * `DatabaseError` - Query failed
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, ClientError>;

    /// Retrieve a record by email. `None` when no row matches.
    ///
    /// # Errors
    /// * `DatabaseError` - Query failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Client>, ClientError>;

    /// Retrieve all records.
    ///
    /// # Errors
    /// * `DatabaseError` - Query failed
    async fn list_all(&self) -> Result<Vec<Client>, ClientError>;

    /// Replace an existing record in full.
    ///
    /// # Errors
    /// * `NotFound` - Affected-row count was zero
    /// * `DatabaseError` - Update failed
    async fn update(&self, client: Client) -> Result<Client, ClientError>;

    /// Remove a record.
    ///
    /// # Errors
    /// * `NotFound` - Affected-row count was zero
    /// * `DatabaseError` - Delete failed
    async fn delete(&self, id: &ClientId) -> Result<(), ClientError>;
}

/// Best-effort publishing of domain events.
///
/// Failures are reported to the caller, which logs and swallows them; a
/// failed publish never unwinds a committed mutation.
#[async_trait]
pub trait EventPublisher: Send + Sync + 'static {
    async fn publish_client_created(
        &self,
        event: &ClientCreatedEvent,
    ) -> Result<(), EventPublisherError>;

    async fn publish_client_updated(
        &self,
        event: &ClientUpdatedEvent,
    ) -> Result<(), EventPublisherError>;

    async fn publish_client_deleted(
        &self,
        event: &ClientDeletedEvent,
    ) -> Result<(), EventPublisherError>;
}
