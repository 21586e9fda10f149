//! Postgres storage
//!
//! Connects with the `DATABASE_URL` environment variable, runs the embedded
//! migrations on startup

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::notes::Note;
use crate::users::User;

use super::CreateNoteValues;
use super::CreateUserValues;
use super::Error;
use super::Result;
use super::Storage;

/// The embedded migrations, from the `migrations/` directory
static MIGRATOR: Migrator = sqlx::migrate!();

/// Postgres storage
#[derive(Clone)]
pub struct Postgres {
    /// Pool of connections
    connection_pool: PgPool,
}

impl Postgres {
    /// Create Postgres storage
    ///
    /// Use the `DATABASE_URL` environment variable
    ///
    /// Migrations will be run
    pub async fn new() -> Self {
        let database_connection_string = std::env::var("DATABASE_URL").expect("Valid DATABASE_URL");

        let connection_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_connection_string)
            .await
            .expect("Valid connection");

        let migration_result = MIGRATOR.run(&connection_pool).await;

        if let Err(err) = migration_result {
            panic!("Migrations could not run: {err}");
        }

        Self { connection_pool }
    }
}

#[async_trait]
impl Storage for Postgres {
    async fn find_any_single_user(&self) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r"
            SELECT id, session_id, username, hashed_password, created_at
            FROM users
            LIMIT 1
            ",
        )
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)
    }

    async fn find_single_user_by_username(&self, username: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r"
            SELECT id, session_id, username, hashed_password, created_at
            FROM users
            WHERE username = $1
            LIMIT 1
            ",
        )
        .bind(username)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)
    }

    async fn find_single_user_by_id(&self, id: &Uuid) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r"
            SELECT id, session_id, username, hashed_password, created_at
            FROM users
            WHERE id = $1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)
    }

    async fn create_user(&self, values: &CreateUserValues) -> Result<User> {
        sqlx::query_as::<_, User>(
            r"
            INSERT INTO users (id, session_id, username, hashed_password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, session_id, username, hashed_password, created_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(values.session_id)
        .bind(values.username)
        .bind(values.hashed_password)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)
    }

    async fn find_all_notes_by_owner(&self, owner_id: &Uuid) -> Result<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            r"
            SELECT id, user_id, name, image_url, created_at
            FROM notes
            WHERE user_id = $1
            ",
        )
        .bind(owner_id)
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)
    }

    async fn find_single_note_by_id(&self, id: i32) -> Result<Option<Note>> {
        sqlx::query_as::<_, Note>(
            r"
            SELECT id, user_id, name, image_url, created_at
            FROM notes
            WHERE id = $1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)
    }

    async fn create_note(&self, values: &CreateNoteValues) -> Result<Note> {
        sqlx::query_as::<_, Note>(
            r"
            INSERT INTO notes (user_id, name, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, image_url, created_at
            ",
        )
        .bind(values.user.id)
        .bind(values.name)
        .bind(values.image_url)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)
    }
}

/// Convert `SQLx` to storage connection error
fn connection_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Connection(err.to_string())
}
