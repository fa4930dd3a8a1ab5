use super::store::CredentialStore;
use crate::UserId;
use crate::auth::Account;
use crate::auth::AuthError;
use crate::auth::Fingerprint;
use crate::auth::Token;
use std::sync::Arc;
use tokio_postgres::Client;

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for registered user accounts.
pub const USERS: &str = "users";

/// Establishes a database connection.
///
/// Connects to PostgreSQL using the `DB_URL` environment variable.
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
///
/// # Panics
///
/// Panics if `DB_URL` is not set or if connection fails.
pub async fn db() -> Arc<Client> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").expect("DB_URL must be set");
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .expect("database connection failed");
    tokio::spawn(connection);
    Arc::new(client)
}

/// Schema metadata for PostgreSQL tables.
/// Purely describes table structure; no I/O.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

impl Schema for Account {
    fn name() -> &'static str {
        USERS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            USERS,
            " (
                id          BIGSERIAL PRIMARY KEY,
                username    TEXT NOT NULL,
                password    TEXT NOT NULL,
                hash        TEXT UNIQUE NOT NULL,
                loginhash   TEXT
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_users_hash ON ",
            USERS,
            " (hash);"
        )
    }
}

/// Ensure the users table and its indices exist.
pub async fn migrate(client: &Client) -> Result<(), PgErr> {
    log::info!("ensuring {} table exists", Account::name());
    client.batch_execute(Account::creates()).await?;
    client.batch_execute(Account::indices()).await?;
    Ok(())
}

impl CredentialStore for Arc<Client> {
    async fn exists(&self, hash: &Fingerprint) -> Result<bool, AuthError> {
        self.query_opt(
            const_format::concatcp!("SELECT 1 FROM ", USERS, " WHERE hash = $1"),
            &[&hash.as_str()],
        )
        .await
        .map(|opt| opt.is_some())
        .map_err(AuthError::store)
    }

    async fn user_id(&self, hash: &Fingerprint) -> Result<Option<UserId>, AuthError> {
        self.query_opt(
            const_format::concatcp!("SELECT id FROM ", USERS, " WHERE hash = $1"),
            &[&hash.as_str()],
        )
        .await
        .map(|opt| opt.map(|row| row.get::<_, UserId>(0)))
        .map_err(AuthError::store)
    }

    async fn rotate(&self, hash: &Fingerprint, token: &Token) -> Result<u64, AuthError> {
        self.execute(
            const_format::concatcp!("UPDATE ", USERS, " SET loginhash = $1 WHERE hash = $2"),
            &[&token.as_str(), &hash.as_str()],
        )
        .await
        .map_err(AuthError::store)
    }
}
