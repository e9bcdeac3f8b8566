use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

use crate::config::Config;
use crate::error::DirectoryError;
use crate::models::{Client, ClientFilter, ClientUpdate, ContactRow, Phone};

/// Database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self, DirectoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(config.database_url())
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an already-built pool (integration tests construct their own).
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// Drop and recreate both tables. Phones go first; the foreign key
    /// forbids the reverse order. Destructive, first-run/demo use only.
    pub async fn init_schema(&self) -> Result<(), DirectoryError> {
        debug!("dropping existing directory tables");
        sqlx::query("DROP TABLE IF EXISTS clients_phones")
            .execute(&self.pool)
            .await?;
        sqlx::query("DROP TABLE IF EXISTS clients")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS clients(
                id SERIAL PRIMARY KEY,
                first_name VARCHAR(40) NOT NULL,
                last_name VARCHAR(40) NOT NULL,
                email VARCHAR(40) UNIQUE NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS clients_phones(
                id SERIAL PRIMARY KEY,
                clients_id INTEGER NOT NULL REFERENCES clients(id),
                phone_number VARCHAR(15)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Register a new client and return its id. The email must be unused.
    /// When `phones` is given it is handed to [`Database::add_phone`] as-is.
    pub async fn add_client(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phones: Option<&str>,
    ) -> Result<i32, DirectoryError> {
        let client_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO clients(first_name, last_name, email) VALUES($1, $2, $3) RETURNING id",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        if let Some(phones) = phones {
            self.add_phone(client_id, phones).await?;
        }

        Ok(client_id)
    }

    /// Attach phone numbers to an existing client, one row per
    /// comma-separated entry. Substrings are stored verbatim, whitespace
    /// included.
    pub async fn add_phone(&self, client_id: i32, phones: &str) -> Result<(), DirectoryError> {
        let mut tx = self.pool.begin().await?;

        for phone_number in phones.split(',') {
            sqlx::query("INSERT INTO clients_phones(clients_id, phone_number) VALUES($1, $2)")
                .bind(client_id)
                .bind(phone_number)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Apply a partial update. Fields left `None` keep their stored value.
    ///
    /// A set `phones` value overwrites every phone row the client has with
    /// that single string; it is not split on commas the way `add_phone`
    /// input is.
    pub async fn change_client(
        &self,
        client_id: i32,
        update: &ClientUpdate,
    ) -> Result<(), DirectoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE clients
            SET first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name),
                email = COALESCE($3, email)
            WHERE id = $4
            "#,
        )
        .bind(update.first_name.as_deref())
        .bind(update.last_name.as_deref())
        .bind(update.email.as_deref())
        .bind(client_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE clients_phones
            SET phone_number = COALESCE($1, phone_number)
            WHERE clients_id = $2
            "#,
        )
        .bind(update.phones.as_deref())
        .bind(client_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete one of a client's numbers, matched exactly. Returns the number
    /// of rows removed. Passing `None` binds SQL NULL, which equality never
    /// matches, so it removes nothing.
    pub async fn delete_phone(
        &self,
        client_id: i32,
        phone: Option<&str>,
    ) -> Result<u64, DirectoryError> {
        let result =
            sqlx::query("DELETE FROM clients_phones WHERE clients_id = $1 AND phone_number = $2")
                .bind(client_id)
                .bind(phone)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    /// Remove a client and all of its phone rows. Unknown ids are a silent
    /// no-op; the returned count is the number of client rows removed.
    pub async fn delete_client(&self, client_id: i32) -> Result<u64, DirectoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM clients_phones WHERE clients_id = $1")
            .bind(client_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(client_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Search the directory. Absent filter fields are ignored; present ones
    /// must match exactly, combined with AND. One row per phone; a client
    /// with no phones still appears once, with no number.
    pub async fn find_client(
        &self,
        filter: &ClientFilter,
    ) -> Result<Vec<ContactRow>, DirectoryError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT c.first_name, c.last_name, c.email, cp.phone_number
            FROM clients c
            FULL JOIN clients_phones cp ON c.id = cp.clients_id
            WHERE (c.first_name = $1 OR $1 IS NULL)
              AND (c.last_name = $2 OR $2 IS NULL)
              AND (c.email = $3 OR $3 IS NULL)
              AND (cp.phone_number = $4 OR $4 IS NULL)
            ORDER BY c.id
            "#,
        )
        .bind(filter.first_name.as_deref())
        .bind(filter.last_name.as_deref())
        .bind(filter.email.as_deref())
        .bind(filter.phone.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// The whole directory, one row per phone, ordered by client id.
    pub async fn snapshot(&self) -> Result<Vec<ContactRow>, DirectoryError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT c.first_name, c.last_name, c.email, cp.phone_number
            FROM clients c
            FULL JOIN clients_phones cp ON c.id = cp.clients_id
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Look up a single client by id.
    pub async fn get_client(&self, id: i32) -> Result<Option<Client>, DirectoryError> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, first_name, last_name, email FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    /// A client's phone rows, oldest first.
    pub async fn phones_for_client(&self, client_id: i32) -> Result<Vec<Phone>, DirectoryError> {
        let phones = sqlx::query_as::<_, Phone>(
            "SELECT id, clients_id, phone_number FROM clients_phones WHERE clients_id = $1 ORDER BY id",
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(phones)
    }
}

/// Initialize the database connection pool
pub async fn init(config: &Config) -> Result<Database, DirectoryError> {
    let db = Database::new(config).await?;

    Ok(db)
}
