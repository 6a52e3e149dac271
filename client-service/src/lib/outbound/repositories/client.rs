use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::EmailAddress;
use crate::domain::client::models::NewClient;
use crate::domain::client::ports::ClientRepository;

/// Raw row shape for the `clients` table.
#[derive(Debug, FromRow)]
struct ClientRow {
    id: i64,
    nom: String,
    prenom: String,
    date_naissance: String,
    adresse: String,
    email: String,
    mot_de_passe: String,
}

impl TryFrom<ClientRow> for Client {
    type Error = ClientError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        Ok(Client {
            id: ClientId(row.id),
            nom: row.nom,
            prenom: row.prenom,
            date_naissance: row.date_naissance,
            adresse: row.adresse,
            email: EmailAddress::new(row.email)?,
            mot_de_passe: row.mot_de_passe,
        })
    }
}

pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = "id, nom, prenom, date_naissance, adresse, email, mot_de_passe";

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn insert(&self, client: NewClient) -> Result<Client, ClientError> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            r#"
            INSERT INTO clients (nom, prenom, date_naissance, adresse, email, mot_de_passe)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(&client.nom)
        .bind(&client.prenom)
        .bind(&client.date_naissance)
        .bind(&client.adresse)
        .bind(client.email.as_str())
        .bind(&client.mot_de_passe)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, ClientError> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM clients
            WHERE id = $1
            "#
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        row.map(Client::try_from).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Client>, ClientError> {
        let row = sqlx::query_as::<_, ClientRow>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM clients
            WHERE email = $1
            "#
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        row.map(Client::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Client>, ClientError> {
        let rows = sqlx::query_as::<_, ClientRow>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM clients
            ORDER BY id
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Client::try_from).collect()
    }

    async fn update(&self, client: Client) -> Result<Client, ClientError> {
        let result = sqlx::query(
            r#"
            UPDATE clients
            SET nom = $2, prenom = $3, date_naissance = $4, adresse = $5,
                email = $6, mot_de_passe = $7
            WHERE id = $1
            "#,
        )
        .bind(client.id.0)
        .bind(&client.nom)
        .bind(&client.prenom)
        .bind(&client.date_naissance)
        .bind(&client.adresse)
        .bind(client.email.as_str())
        .bind(&client.mot_de_passe)
        .execute(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ClientError::NotFound(client.id.0));
        }

        Ok(client)
    }

    async fn delete(&self, id: &ClientId) -> Result<(), ClientError> {
        let result = sqlx::query(
            r#"
            DELETE FROM clients
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ClientError::NotFound(id.0));
        }

        Ok(())
    }
}
